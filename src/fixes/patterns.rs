//! Theme and plugin signature tables
//!
//! Fixed lookup data for markup generated by known page builders and
//! plugins. The tables are immutable statics; table order is detection
//! order for themes (first detector hit wins).

/// A known structural issue tied to a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueSignature {
    /// Stable issue key, underscore-separated
    pub key: &'static str,
    /// Markup substring that confirms the issue is present
    pub pattern: &'static str,
    /// What the pattern implies structurally
    pub description: &'static str,
    /// How to address it
    pub fix: &'static str,
}

/// A theme/page-builder signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSignature {
    /// Stable signature key
    pub key: &'static str,
    /// Human name
    pub name: &'static str,
    /// Substring whose presence anywhere in the markup detects the theme
    pub detector: &'static str,
    /// Known issues to probe for once detected
    pub issues: &'static [IssueSignature],
    /// Vendor performance documentation
    pub docs_url: Option<&'static str>,
}

/// A plugin signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSignature {
    /// Stable signature key
    pub key: &'static str,
    /// Human name
    pub name: &'static str,
    /// Substring whose presence anywhere in the markup detects the plugin
    pub detector: &'static str,
    /// Known issues to probe for once detected
    pub issues: &'static [IssueSignature],
}

/// Theme signatures in detection order
pub const THEME_SIGNATURES: &[ThemeSignature] = &[
    ThemeSignature {
        key: "astra",
        name: "Astra",
        detector: "ast-",
        issues: &[IssueSignature {
            key: "wrapper_divs",
            pattern: "<div class=\"ast-container\">",
            description: "Astra uses multiple container wrappers",
            fix: "Go to Customize > Layout > Container to simplify structure",
        }],
        docs_url: Some("https://developer.theme.dev/docs/optimize-astra-theme/"),
    },
    ThemeSignature {
        key: "divi",
        name: "Divi",
        detector: "et_pb_",
        issues: &[IssueSignature {
            key: "module_wrappers",
            pattern: "<div class=\"et_pb_module",
            description: "Divi modules create nested wrapper structures",
            fix: "Use Divi's \"Reduce DOM Size\" option in Theme Options",
        }],
        docs_url: Some("https://www.elegantthemes.com/documentation/divi/performance/"),
    },
    ThemeSignature {
        key: "elementor",
        name: "Elementor",
        detector: "elementor-",
        issues: &[
            IssueSignature {
                key: "section_wrappers",
                pattern: "<div class=\"elementor-section",
                description: "Elementor sections create 5+ nested divs",
                fix: "Enable Elementor's \"Optimized DOM Output\" in Settings > Experiments",
            },
            IssueSignature {
                key: "column_wrappers",
                pattern: "<div class=\"elementor-column-wrap",
                description: "Column wrappers add unnecessary depth",
                fix: "Update to Elementor 3.0+ which reduces column wrappers",
            },
        ],
        docs_url: Some("https://developers.elementor.com/docs/optimizing-performance/"),
    },
    ThemeSignature {
        key: "wpbakery",
        name: "WPBakery",
        detector: "vc_",
        issues: &[IssueSignature {
            key: "row_wrappers",
            pattern: "<div class=\"vc_row",
            description: "WPBakery rows use excessive wrapper divs",
            fix: "Consider migrating to a lighter page builder",
        }],
        docs_url: None,
    },
    ThemeSignature {
        key: "generatepress",
        name: "GeneratePress",
        detector: "generate-",
        issues: &[],
        docs_url: Some("https://developer.theme.dev/docs/generatepress-performance/"),
    },
];

/// Plugin signatures; all matching signatures are collected
pub const PLUGIN_SIGNATURES: &[PluginSignature] = &[
    PluginSignature {
        key: "woocommerce",
        name: "WooCommerce",
        detector: "woocommerce",
        issues: &[IssueSignature {
            key: "product_loops",
            pattern: "<ul class=\"products",
            description: "Product grids create deep DOM structures",
            fix: "Limit products per page and use AJAX pagination",
        }],
    },
    PluginSignature {
        key: "yoast",
        name: "Yoast SEO",
        detector: "yoast",
        issues: &[IssueSignature {
            key: "schema_output",
            pattern: "yoast-schema",
            description: "Schema markup adds hidden elements",
            fix: "This is necessary for SEO - keep it",
        }],
    },
    PluginSignature {
        key: "wpforms",
        name: "WPForms",
        detector: "wpforms",
        issues: &[IssueSignature {
            key: "form_wrappers",
            pattern: "<div class=\"wpforms-container",
            description: "Form containers use multiple wrapper divs",
            fix: "Use minimal form styling in WPForms settings",
        }],
    },
    PluginSignature {
        key: "contact-form-7",
        name: "Contact Form 7",
        detector: "wpcf7",
        issues: &[IssueSignature {
            key: "form_structure",
            pattern: "<div class=\"wpcf7",
            description: "CF7 adds wrapper divs for each form",
            fix: "Use a lighter form plugin or custom HTML forms",
        }],
    },
    PluginSignature {
        key: "slider-revolution",
        name: "Slider Revolution",
        detector: "rev_slider",
        issues: &[IssueSignature {
            key: "slider_layers",
            pattern: "rs-layer",
            description: "Each slider layer adds multiple DOM nodes",
            fix: "Reduce slider complexity or use CSS-only alternatives",
        }],
    },
];
