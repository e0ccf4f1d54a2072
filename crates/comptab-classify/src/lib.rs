//! Single-responsibility filename classification for deterministic typing.
//!
//! Maps a filename to a Salesforce metadata type by trailing-suffix match
//! against a fixed rule table. The table order is load-bearing: rules are
//! tried top to bottom and the first trailing match wins, so compound
//! suffixes must be able to beat any simple suffix they overlap with.

/// Ordered (suffix, metadata type) rules. First trailing match wins.
///
/// Matching is exact and case-sensitive; do not case-fold.
pub const METADATA_RULES: &[(&str, &str)] = &[
    // Apex & Visualforce
    (".cls", "ApexClass"),
    (".cls-meta.xml", "ApexClass"),
    (".trigger", "ApexTrigger"),
    (".trigger-meta.xml", "ApexTrigger"),
    (".component", "ApexComponent"),
    (".component-meta.xml", "ApexComponent"),
    (".page", "VisualforcePage"),
    (".page-meta.xml", "VisualforcePage"),
    // Aura components
    (".cmp", "AuraComponent"),
    (".cmp-meta.xml", "AuraComponent"),
    (".evt", "AuraEvent"),
    (".evt-meta.xml", "AuraEvent"),
    (".app", "AuraApplication"),
    (".app-meta.xml", "AuraApplication"),
    (".design", "AuraDesign"),
    (".design-meta.xml", "AuraDesign"),
    // Lightning Web Components. The -meta.xml file is what identifies an
    // LWC bundle; plain .js files fall through to the extension fallback.
    (".js-meta.xml", "LightningWebComponent"),
    // Objects and fields
    (".object-meta.xml", "CustomObject"),
    (".field-meta.xml", "CustomField"),
    // Other metadata types
    (".tab-meta.xml", "CustomTab"),
    (".layout-meta.xml", "Layout"),
    (".listView-meta.xml", "ListView"),
    (".webLink-meta.xml", "WebLink"),
    (".fieldSet-meta.xml", "FieldSet"),
    (".profile-meta.xml", "Profile"),
    (".permissionset-meta.xml", "PermissionSet"),
    (".resource-meta.xml", "StaticResource"),
    (".flow-meta.xml", "Flow"),
    (".flowDefinition-meta.xml", "FlowDefinition"),
    (".email-meta.xml", "EmailTemplate"),
    (".report-meta.xml", "Report"),
    (".dashboard-meta.xml", "Dashboard"),
    (".customSite-meta.xml", "CustomSite"),
    (".assignmentRules-meta.xml", "AssignmentRules"),
    (".escalationRules-meta.xml", "EscalationRules"),
    (".remoteSite-meta.xml", "RemoteSiteSetting"),
    (".certificate-meta.xml", "Certificate"),
    (".labels-meta.xml", "CustomLabels"),
    (".recordType-meta.xml", "RecordType"),
    (".compactLayout-meta.xml", "CompactLayout"),
    (".connectedApp-meta.xml", "ConnectedApp"),
    (".translation-meta.xml", "Translations"),
    (".site-meta.xml", "SiteDotCom"),
    (".networkBranding-meta.xml", "NetworkBranding"),
    (".territory2Rule-meta.xml", "Territory2Rule"),
    (".territory2Type-meta.xml", "Territory2Type"),
    (".customPermission-meta.xml", "CustomPermission"),
    (".quickAction-meta.xml", "QuickAction"),
];

/// Result of classifying a single filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Metadata type from the rule table, or the raw-extension fallback.
    /// Empty when the filename has no dot at all.
    pub component_type: String,
    /// Filename with the matched suffix removed. Unchanged in the fallback
    /// path.
    pub name: String,
}

/// Classify a filename by trailing-suffix match against [`METADATA_RULES`].
///
/// When no rule matches, the type falls back to the filename's own trailing
/// extension component(s): the last two dot-separated components joined by a
/// dot when there are three or more, the last component when there are
/// exactly two, and the empty string for a dotless filename.
#[must_use]
pub fn classify(filename: &str) -> Classification {
    for (suffix, component_type) in METADATA_RULES {
        if let Some(stripped) = filename.strip_suffix(suffix) {
            return Classification {
                component_type: (*component_type).to_string(),
                name: stripped.to_string(),
            };
        }
    }

    Classification {
        component_type: raw_extension(filename),
        name: filename.to_string(),
    }
}

/// Extract the trailing extension component(s) of a filename.
///
/// For `111.222.abc.xyz` this returns `abc.xyz`; for `bar.txt` it returns
/// `txt`; for `README` it returns the empty string.
#[must_use]
pub fn raw_extension(filename: &str) -> String {
    let parts: Vec<&str> = filename.split('.').collect();
    match parts.len() {
        0 | 1 => String::new(),
        2 => parts[1].to_string(),
        n => parts[n - 2..].join("."),
    }
}
