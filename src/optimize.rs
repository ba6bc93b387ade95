//! Optional markup optimization run before parsing.
//!
//! A pure text → text filter. The built-in `BasicOptimizer` covers the
//! cleanup passes icons exported from editors usually need; hosts with a
//! real optimizer plug it in through `MarkupOptimizer`.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tracing::{trace, warn};

use crate::error::Result;
use crate::options::OptimizerOptions;

pub trait MarkupOptimizer: Send + Sync {
    fn optimize(&self, content: &str, path: &Path, options: &OptimizerOptions) -> Result<String>;
}

lazy_static! {
    static ref XML_PROC_INST_RE: Regex = Regex::new(r"(?s)<\?xml\b.*?\?>").unwrap();
    static ref DOCTYPE_RE: Regex = Regex::new(r"(?is)<!DOCTYPE\b(?:[^\[>]|\[[^\]]*\])*>").unwrap();
    static ref COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref METADATA_RE: Regex =
        Regex::new(r"(?is)<metadata\b[^>]*/>|<metadata\b[^>]*>.*?</metadata\s*>").unwrap();
    static ref TITLE_RE: Regex =
        Regex::new(r"(?is)<title\b[^>]*/>|<title\b[^>]*>.*?</title\s*>").unwrap();
    static ref DESC_RE: Regex =
        Regex::new(r"(?is)<desc\b[^>]*/>|<desc\b[^>]*>.*?</desc\s*>").unwrap();
}

pub const DEFAULT_PRESET: &[&str] = &[
    "removeXMLProcInst",
    "removeDoctype",
    "removeComments",
    "removeMetadata",
];

fn pass_regex(name: &str) -> Option<&'static Regex> {
    match name {
        "removeXMLProcInst" => Some(&*XML_PROC_INST_RE),
        "removeDoctype" => Some(&*DOCTYPE_RE),
        "removeComments" => Some(&*COMMENT_RE),
        "removeMetadata" => Some(&*METADATA_RE),
        "removeTitle" => Some(&*TITLE_RE),
        "removeDesc" => Some(&*DESC_RE),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicOptimizer;

impl MarkupOptimizer for BasicOptimizer {
    fn optimize(&self, content: &str, path: &Path, options: &OptimizerOptions) -> Result<String> {
        let mut output = content.to_string();

        let preset: Vec<&str> = DEFAULT_PRESET.to_vec();
        let plugins: Vec<&str> = match &options.plugins {
            Some(plugins) => plugins.iter().map(String::as_str).collect(),
            None => preset,
        };

        for plugin in plugins {
            match pass_regex(plugin) {
                Some(re) => {
                    trace!(plugin, path = %path.display(), "running optimizer pass");
                    output = re.replace_all(&output, "").into_owned();
                }
                None => warn!(plugin, "unsupported optimizer plugin, skipping"),
            }
        }

        Ok(output)
    }
}
