//
//  mediawiki-client
//  api/siteinfo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! General site information (`meta=siteinfo`, `siprop=general`)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// The `query.general` block of a `meta=siteinfo` response.
///
/// The commonly used fields are typed; everything else the wiki reports is
/// kept in [`SiteInfo::extra`].
///
/// # Example
///
/// ```rust
/// use mediawiki_client::api::SiteInfo;
///
/// let yaml = "sitename: Wikipedia\nlang: en\nmainpage: Main Page\nrights: CC BY-SA\n";
/// let info: SiteInfo = serde_yaml::from_str(yaml).unwrap();
///
/// assert_eq!(info.sitename, "Wikipedia");
/// assert_eq!(info.mainpage.as_deref(), Some("Main Page"));
/// assert!(info.extra.contains_key("rights"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Display name of the wiki.
    pub sitename: String,

    /// Content language code.
    pub lang: String,

    /// Title of the main page.
    #[serde(default)]
    pub mainpage: Option<String>,

    /// URL of the main page.
    #[serde(default)]
    pub base: Option<String>,

    /// MediaWiki version string, e.g. `MediaWiki 1.41.0`.
    #[serde(default)]
    pub generator: Option<String>,

    /// Server URL, e.g. `//en.wikipedia.org`.
    #[serde(default)]
    pub server: Option<String>,

    /// All other fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
