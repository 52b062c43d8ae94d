use std::fs;
use std::path::Path;

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::{escape_attr, escape_html};

const DEFAULT_VIEW: &str = include_str!("../../templates/view.html");
const DEFAULT_EDIT: &str = include_str!("../../templates/edit.html");

const REQUIRED_PLACEHOLDERS: [&str; 2] = ["{{TITLE}}", "{{BODY}}"];

/// The two page templates, loaded once at startup.
///
/// Custom templates are read from the template directory when present,
/// otherwise the built-in ones are used. Either way, a template missing a
/// required placeholder fails startup instead of producing broken pages
/// at request time.
pub struct Templates {
    view: String,
    edit: String,
}

impl Templates {
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        Ok(Self {
            view: load_template(dir, "view.html", DEFAULT_VIEW)?,
            edit: load_template(dir, "edit.html", DEFAULT_EDIT)?,
        })
    }

    /// Read-only rendering of a page. `modified` is a preformatted footer
    /// line, empty when the file mtime is unavailable.
    pub fn render_view(&self, page: &Page, modified: &str) -> String {
        render(&self.view, page, modified)
    }

    pub fn render_edit(&self, page: &Page) -> String {
        render(&self.edit, page, "")
    }
}

fn load_template(dir: &Path, name: &str, fallback: &str) -> Result<String, WikiError> {
    let path = dir.join(name);
    let template = if path.is_file() {
        log::debug!("Loading template {:?}", path);
        fs::read_to_string(&path)
            .map_err(|e| WikiError::Startup(format!("template '{}': {}", name, e)))?
    } else {
        fallback.to_string()
    };
    for placeholder in REQUIRED_PLACEHOLDERS {
        if !template.contains(placeholder) {
            return Err(WikiError::Startup(format!(
                "template '{}' is missing the {} placeholder",
                name, placeholder
            )));
        }
    }
    Ok(template)
}

// The body is substituted last so page content never has placeholders
// expanded inside it.
fn render(template: &str, page: &Page, modified: &str) -> String {
    template
        .replace("{{MODIFIED}}", modified)
        .replace("{{TITLE}}", &escape_attr(&page.title))
        .replace("{{BODY}}", &escape_html(&page.body_text()))
}
