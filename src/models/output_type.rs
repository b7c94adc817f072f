// file: src/models/output_type.rs
// description: output formats a worker may produce for extracted content

use crate::error::{ConnectorError, Result};
use crate::models::OUTPUT_TYPE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputType {
    #[serde(rename = "text")]
    Text,
    #[default]
    #[serde(rename = "text_xml")]
    TextXml,
    #[serde(rename = "xml_text")]
    XmlText,
    #[serde(rename = "getXHTML")]
    GetXhtml,
}

impl OutputType {
    pub const ALL: [OutputType; 4] = [
        OutputType::Text,
        OutputType::TextXml,
        OutputType::XmlText,
        OutputType::GetXhtml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Text => "text",
            OutputType::TextXml => "text_xml",
            OutputType::XmlText => "xml_text",
            OutputType::GetXhtml => "getXHTML",
        }
    }

    pub fn allowed_names() -> Vec<String> {
        Self::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConnectorError::InvalidEnumValue {
                key: OUTPUT_TYPE.to_string(),
                value: s.to_string(),
                allowed: Self::allowed_names(),
            })
    }
}
