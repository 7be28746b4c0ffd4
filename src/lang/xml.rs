//! XML support, including MSBuild and NuGet project files.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// XML documents.
pub struct Xml;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["AttValue", "CharData", "CDSect"],
    identifier: &["Name"],
    namespace: &[],
    class: &[],
    comment: &["Comment"],
};

impl Language for Xml {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn extensions(&self) -> &[&'static str] {
        &["xml", "csproj", "props", "targets", "nuspec", "config"]
    }

    fn filenames(&self) -> &[&'static str] {
        &[
            "Directory.Build.props",
            "Directory.Build.targets",
            "Directory.Packages.props",
        ]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_xml::LANGUAGE_XML.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
