//! The editor page. Form controls post each change to the editor JSON API;
//! the page itself is a snapshot of the current editor state.

use crate::editor::entries::entry_fields;
use crate::editor::RecordStore;
use crate::models::fields::{ListName, ScalarField};
use crate::models::profile::{Profile, SkillItem};
use crate::models::template::{Style, TemplateId};
use crate::render::html::escape;
use crate::storage::preferences::StylePreference;

/// Fields shown for `template`, in form order.
pub fn visible_fields(editor: &RecordStore) -> Vec<ScalarField> {
    ScalarField::ALL
        .into_iter()
        .filter(|f| *f != ScalarField::Github || editor.capabilities().shows_github)
        .collect()
}

/// List tabs shown for the active template.
pub fn visible_lists(editor: &RecordStore) -> Vec<ListName> {
    let capabilities = editor.capabilities();
    ListName::ALL
        .into_iter()
        .filter(|list| capabilities.shows(*list))
        .collect()
}

pub fn render_admin_page(editor: &RecordStore, preference: Option<StylePreference>) -> String {
    let profile = editor.profile();
    let mut html = String::new();

    html.push_str("<main class=\"admin\">\n<h1>Resume Content Editor</h1>\n");
    html.push_str(&template_picker(editor.template()));

    html.push_str("<section data-tab=\"personal\">\n<h2>Personal Info</h2>\n");
    for field in visible_fields(editor) {
        let value = escape(profile.scalar(field));
        let control = if field == ScalarField::Summary {
            format!(
                "<textarea data-field=\"{}\" rows=\"4\">{value}</textarea>",
                field.as_str()
            )
        } else {
            format!(
                "<input data-field=\"{}\" value=\"{value}\">",
                field.as_str()
            )
        };
        html.push_str(&format!(
            "<label>{}\n{control}</label>\n",
            escape(field.label())
        ));
    }
    html.push_str("</section>\n");

    let skill_levels = editor.capabilities().skill_levels;
    for list in visible_lists(editor) {
        html.push_str(&format!(
            "<section data-tab=\"{}\">\n<h2>{}</h2>\n",
            list.as_str(),
            escape(list.heading())
        ));
        let fields = entry_fields(list);
        for index in 0..profile.list_len(list) {
            html.push_str(&entry_form(profile, list, index, fields, skill_levels));
        }
        html.push_str(&format!(
            "<button data-method=\"POST\" data-action=\"/api/v1/editor/lists/{}\">Add</button>\n</section>\n",
            list.as_str()
        ));
    }

    html.push_str(&mix_and_match(preference));

    html.push_str(
        "<div class=\"actions\">\
         <button data-method=\"POST\" data-action=\"/api/v1/editor/save\">Save</button>\
         <form method=\"post\" action=\"/api/v1/editor/preview\"><button>Preview</button></form>\
         <p id=\"status\" role=\"status\"></p></div>\n</main>\n",
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Resume Editor</title>\n<style>{ADMIN_CSS}</style>\n</head>\n<body>\n{html}\
         <script>{ADMIN_JS}</script>\n</body>\n</html>\n"
    )
}

fn template_picker(active: TemplateId) -> String {
    let mut html = String::from("<label>Template\n<select id=\"template\">\n");
    for id in TemplateId::ALL {
        let selected = if id == active { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            id.as_str(),
            escape(id.display_name())
        ));
    }
    html.push_str("</select></label>\n");
    html
}

/// Picker for the saved (profession, style) pair.
fn mix_and_match(preference: Option<StylePreference>) -> String {
    let mut html = String::from(
        "<section data-tab=\"mix-and-match\">\n<h2>Mix &amp; Match</h2>\n\
         <label>Profession\n<select id=\"pref-profession\">\n",
    );
    for id in TemplateId::PROFESSIONS {
        let selected = if preference.map(|p| p.profession) == Some(id) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            id.as_str(),
            escape(id.display_name())
        ));
    }
    html.push_str("</select></label>\n<label>Style\n<select id=\"pref-style\">\n");
    for style in Style::ALL {
        let selected = if preference.map(|p| p.style) == Some(style) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            style.as_str(),
            style.renderer().display_name()
        ));
    }
    html.push_str(
        "</select></label>\n<button id=\"pref-apply\">Apply combination</button>\
         <button data-method=\"DELETE\" data-action=\"/api/v1/style-preference\">Reset</button>\n</section>\n",
    );
    html
}

fn entry_form(
    profile: &Profile,
    list: ListName,
    index: usize,
    fields: &[&str],
    skill_levels: bool,
) -> String {
    let mut html = format!("<fieldset class=\"entry\">\n<legend>#{}</legend>\n", index + 1);
    for field in fields {
        html.push_str(&format!(
            "<label>{field}\n<input data-list=\"{}\" data-index=\"{index}\" data-entry-field=\"{field}\" value=\"{}\"></label>\n",
            list.as_str(),
            escape(&entry_value(profile, list, index, field))
        ));
    }

    match list {
        ListName::Experiences => {
            let achievements = &profile.experiences[index].achievements;
            html.push_str("<div class=\"sub\"><h3>Achievements</h3>\n");
            for (j, achievement) in achievements.iter().enumerate() {
                html.push_str(&format!(
                    "<div class=\"row\"><input data-experience=\"{index}\" data-achievement=\"{j}\" value=\"{}\">\
                     <button data-method=\"DELETE\" data-action=\"/api/v1/editor/experiences/{index}/achievements/{j}\">Remove</button></div>\n",
                    escape(achievement)
                ));
            }
            html.push_str(&format!(
                "<button data-method=\"POST\" data-action=\"/api/v1/editor/experiences/{index}/achievements\">Add achievement</button></div>\n"
            ));
        }
        ListName::Skills => {
            html.push_str("<div class=\"sub\"><h3>Items</h3>\n");
            for (j, item) in profile.skills[index].items.iter().enumerate() {
                html.push_str(&skill_row(index, j, item, skill_levels));
            }
            html.push_str(&format!(
                "<button data-method=\"POST\" data-action=\"/api/v1/editor/skills/{index}/items\">Add skill</button></div>\n"
            ));
        }
        _ => {}
    }

    html.push_str(&format!(
        "<button data-method=\"DELETE\" data-action=\"/api/v1/editor/lists/{}/{index}\">Remove</button>\n</fieldset>\n",
        list.as_str()
    ));
    html
}

fn skill_row(category: usize, index: usize, item: &SkillItem, skill_levels: bool) -> String {
    let level = if skill_levels {
        format!(
            "<input class=\"level\" type=\"number\" min=\"0\" max=\"100\" value=\"{}\">",
            item.level().map(|l| l.to_string()).unwrap_or_default()
        )
    } else {
        String::new()
    };
    let kind = match item {
        SkillItem::LabelOnly { .. } => "label_only",
        SkillItem::WithLevel { .. } => "with_level",
    };
    format!(
        "<div class=\"row\" data-skill=\"{category}/{index}\" data-kind=\"{kind}\"><input class=\"name\" value=\"{}\">{level}\
         <button data-method=\"DELETE\" data-action=\"/api/v1/editor/skills/{category}/items/{index}\">Remove</button></div>\n",
        escape(item.name())
    )
}

fn entry_value(profile: &Profile, list: ListName, index: usize, field: &str) -> String {
    let value = match list {
        ListName::Experiences => {
            let e = &profile.experiences[index];
            match field {
                "title" => &e.title,
                "company" => &e.company,
                "period" => &e.period,
                _ => &e.description,
            }
        }
        ListName::Skills => &profile.skills[index].category,
        ListName::Education => {
            let e = &profile.education[index];
            match field {
                "degree" => &e.degree,
                "institution" => &e.institution,
                _ => &e.year,
            }
        }
        ListName::Projects => {
            let p = &profile.projects[index];
            match field {
                "name" => &p.name,
                "description" => &p.description,
                "technologies" => return p.technologies.join(", "),
                _ => return p.link.clone().unwrap_or_default(),
            }
        }
        ListName::Campaigns => {
            let c = &profile.campaigns[index];
            if field == "name" {
                &c.name
            } else {
                &c.result
            }
        }
        ListName::Certifications => {
            let c = &profile.certifications[index];
            match field {
                "name" => &c.name,
                "issuer" => &c.issuer,
                _ => &c.year,
            }
        }
        ListName::Specialties => &profile.specialties[index],
        ListName::Courses => {
            let c = &profile.courses[index];
            if field == "name" {
                &c.name
            } else {
                &c.description
            }
        }
        ListName::Portfolio => {
            let p = &profile.portfolio[index];
            match field {
                "title" => &p.title,
                "description" => &p.description,
                _ => &p.image,
            }
        }
        ListName::Languages => {
            let l = &profile.languages[index];
            if field == "language" {
                &l.language
            } else {
                &l.proficiency
            }
        }
    };
    value.clone()
}

const ADMIN_CSS: &str = "\
body{margin:0;background:#f3f4f6;font-family:system-ui,sans-serif;color:#374151}\
.admin{max-width:56rem;margin:2rem auto;background:#fff;padding:2rem;border-radius:.5rem}\
label{display:block;margin:.5rem 0;font-size:.875rem}\
input,textarea,select{display:block;width:100%;padding:.4rem;border:1px solid #d1d5db;border-radius:.3rem}\
.row{display:flex;gap:.5rem;margin:.25rem 0}.row input.level{width:5rem}\
fieldset{border:1px solid #e5e7eb;border-radius:.4rem;margin:.75rem 0}\
.actions{display:flex;gap:1rem;align-items:center;margin-top:1.5rem}";

const ADMIN_JS: &str = r#"
async function call(method, url, body) {
  const res = await fetch(url, {
    method,
    headers: { "content-type": "application/json" },
    body: body === undefined ? undefined : JSON.stringify(body),
  });
  if (!res.ok) {
    const err = await res.json().catch(() => null);
    alert(err ? err.error.message : res.statusText);
    return null;
  }
  return res;
}

document.addEventListener("change", async (ev) => {
  const el = ev.target;
  const d = el.dataset;
  if (el.id === "template") {
    if (await call("PUT", "/api/v1/editor/template", { template: el.value })) location.reload();
  } else if (d.field) {
    await call("PUT", `/api/v1/editor/fields/${d.field}`, { value: el.value });
  } else if (d.list) {
    await call("PATCH", `/api/v1/editor/lists/${d.list}/${d.index}`, { field: d.entryField, value: el.value });
  } else if (d.achievement) {
    await call("PATCH", `/api/v1/editor/experiences/${d.experience}/achievements/${d.achievement}`, { value: el.value });
  } else if (el.closest("[data-skill]")) {
    const row = el.closest("[data-skill]");
    const [cat, idx] = row.dataset.skill.split("/");
    const name = row.querySelector(".name").value;
    const level = row.querySelector(".level");
    // A label-only item stays label-only until its level is filled in.
    const rated = level && (row.dataset.kind === "with_level" || level.value !== "");
    const item = rated
      ? { kind: "with_level", name, level: Number(level.value) || 0 }
      : { kind: "label_only", name };
    await call("PATCH", `/api/v1/editor/skills/${cat}/items/${idx}`, item);
  }
});

document.addEventListener("click", async (ev) => {
  if (ev.target.id === "pref-apply") {
    const profession = document.getElementById("pref-profession").value;
    const style = document.getElementById("pref-style").value;
    if (await call("PUT", "/api/v1/style-preference", { profession, style })) {
      location.href = `/resume/${profession}`;
    }
    return;
  }
  const d = ev.target.dataset;
  if (!d.action) return;
  const res = await call(d.method, d.action);
  if (!res) return;
  if (d.action.endsWith("/save")) {
    document.getElementById("status").textContent = (await res.json()).message;
  } else {
    location.reload();
  }
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_field_only_for_capable_templates() {
        let developer = RecordStore::new(TemplateId::Developer);
        assert!(visible_fields(&developer).contains(&ScalarField::Github));

        let finance = RecordStore::new(TemplateId::Finance);
        assert!(!visible_fields(&finance).contains(&ScalarField::Github));
    }

    #[test]
    fn test_tabs_follow_capabilities() {
        let marketing = RecordStore::new(TemplateId::Marketing);
        let lists = visible_lists(&marketing);
        assert!(lists.contains(&ListName::Campaigns));
        assert!(!lists.contains(&ListName::Projects));

        let page = render_admin_page(&marketing, None);
        assert!(page.contains("data-tab=\"campaigns\""));
        assert!(!page.contains("data-tab=\"projects\""));
        assert!(page.contains("<option value=\"marketing\" selected>"));
    }

    #[test]
    fn test_level_inputs_only_for_rated_skills() {
        let creative = render_admin_page(&RecordStore::new(TemplateId::Creative), None);
        assert!(creative.contains("class=\"level\""));

        let classic = render_admin_page(&RecordStore::new(TemplateId::Classic), None);
        assert!(!classic.contains("class=\"level\""));
    }

    #[test]
    fn test_skill_rows_carry_their_kind() {
        let creative = RecordStore::new(TemplateId::Creative);
        let first = &creative.profile().skills[0].items[0];
        assert_eq!(first.level(), None);

        let page = render_admin_page(&creative, None);
        assert!(page.contains("data-skill=\"0/0\" data-kind=\"label_only\""));
        assert!(page.contains("class=\"level\" type=\"number\" min=\"0\" max=\"100\" value=\"\""));

        let mut rated = RecordStore::new(TemplateId::Creative);
        let index = rated.add_skill(0).unwrap();
        let page = render_admin_page(&rated, None);
        assert!(page.contains(&format!("data-skill=\"0/{index}\" data-kind=\"with_level\"")));
    }

    #[test]
    fn test_entry_values_prefilled_and_escaped() {
        let page = render_admin_page(&RecordStore::new(TemplateId::Developer), None);
        assert!(page.contains("value=\"Go, Kubernetes, Prometheus\""));
        assert!(page.contains("value=\"DevOps &amp; Tools\""));
    }

    #[test]
    fn test_saved_combination_preselected() {
        let pref = StylePreference {
            profession: TemplateId::Finance,
            style: Style::Modern,
        };
        let page = render_admin_page(&RecordStore::new(TemplateId::Classic), Some(pref));
        assert!(page.contains("<option value=\"finance\" selected>"));
        assert!(page.contains("<option value=\"modern\" selected>"));
    }
}
