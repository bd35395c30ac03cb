//! Source and export formats of sidebar files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{SidebarError, SidebarSet};

/// Header of the generated `CommonJS` module.
const MODULE_HEADER: &str = "// @ts-check\n\n\
/** @type {import('@docusaurus/plugin-content-docs').SidebarsConfig} */\n";

/// Format of a sidebar source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from a file extension (`.json`, `.yaml`, `.yml`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Format of exported sidebars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// `CommonJS` module loaded by the site generator (`sidebars.js`).
    #[default]
    Js,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Render a set in this format.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the set cannot be encoded.
    pub fn render(self, set: &SidebarSet) -> Result<String, SidebarError> {
        match self {
            Self::Js => {
                let body = serde_json::to_string_pretty(set)?;
                Ok(format!(
                    "{MODULE_HEADER}const sidebars = {body};\n\nmodule.exports = sidebars;\n"
                ))
            }
            Self::Json => {
                let mut body = serde_json::to_string_pretty(set)?;
                body.push('\n');
                Ok(body)
            }
            Self::Yaml => Ok(serde_yaml::to_string(set)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" => Ok(Self::Js),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown export format `{other}` (expected js, json or yaml)"
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("sidebars.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("dir/sidebars.YML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("sidebars.js")), None);
        assert_eq!(SourceFormat::from_path(Path::new("sidebars")), None);
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("JS".parse::<ExportFormat>(), Ok(ExportFormat::Js));
        assert_eq!("yml".parse::<ExportFormat>(), Ok(ExportFormat::Yaml));
        assert!("toml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_render_js_module() {
        let rendered = ExportFormat::Js.render(builtin::sidebars()).unwrap();

        assert!(rendered.starts_with("// @ts-check\n"));
        assert!(rendered.contains("const sidebars = {\n  \"yaradare\": ["));
        assert!(rendered.contains("\"className\": \"sidebar-title\""));
        assert!(rendered.ends_with("module.exports = sidebars;\n"));
    }

    #[test]
    fn test_render_json_parses_back() {
        let set = builtin::sidebars();

        let rendered = ExportFormat::Json.render(set).unwrap();
        let parsed = SidebarSet::parse(&rendered, SourceFormat::Json).unwrap();

        assert_eq!(&parsed, set);
    }

    #[test]
    fn test_render_yaml_keeps_documents_as_strings() {
        let rendered = ExportFormat::Yaml.render(builtin::sidebars()).unwrap();

        assert!(rendered.contains("- yaradare/index\n"));
        assert!(rendered.contains("type: category"));
    }
}
