//! File contents for a generated component.
//!
//! The name is interpolated as-is; it must already be a [`ComponentName`].

use cgen_core::{ComponentName, Language};

/// A rendered file, named relative to the component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// `<name>.component.<ext>`
pub fn logic_file_name(name: &ComponentName, language: Language) -> String {
    format!("{}.component.{}", name, language.extension())
}

/// `<name>.component.html`
pub fn template_file_name(name: &ComponentName) -> String {
    format!("{}.component.html", name)
}

/// `<name>.component.style.html`
pub fn style_file_name(name: &ComponentName) -> String {
    format!("{}.component.style.html", name)
}

/// Render all files of a component in write order: logic, template, style.
pub fn render_component(name: &ComponentName, language: Language) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            file_name: logic_file_name(name, language),
            contents: render_logic(name, language),
        },
        GeneratedFile {
            file_name: template_file_name(name),
            contents: render_template(),
        },
        GeneratedFile {
            file_name: style_file_name(name),
            contents: render_style(),
        },
    ]
}

/// Component definition with a `title` prop. The markup and style files are
/// read next to the component when it loads, not baked in here.
pub fn render_logic(name: &ComponentName, language: Language) -> String {
    let template_file = template_file_name(name);
    let style_file = style_file_name(name);

    let props = match language {
        Language::TypeScript => {
            r#"{
    title: {
      type: String,
      default: '',
    },
  }"#
        }
        Language::JavaScript => r#"{ title: { type: String, default: '' } }"#,
    };

    format!(
        r#"import {{ defineComponent }} from 'vue';
import {{ readFileSync }} from 'fs';
import {{ join }} from 'path';

const template = readFileSync(join(__dirname, '{template_file}'), 'utf-8');
const style = readFileSync(join(__dirname, '{style_file}'), 'utf-8');

export default defineComponent({{
  name: '{name}',
  props: {props},
  template: template + style,
}});
"#
    )
}

pub fn render_template() -> String {
    "<div>{{ title }}</div>\n".to_string()
}

pub fn render_style() -> String {
    "<style></style>\n".to_string()
}
