use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    pub email: String,
    pub linkedin: String,
    pub youtube: String,
    pub resume: String,
    pub x_handle: String,
    pub x_url: String,
    pub instagram_url: String,
    pub writing_valuation: String,
    pub writing_research: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_embed_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub organization: String,
    pub role: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub stack: BTreeSet<String>,
}

/// The immutable content behind the page. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    pub skills: Vec<String>,
    pub links: LinkSet,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

