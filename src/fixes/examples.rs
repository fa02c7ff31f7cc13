//! Static before/after examples and builder-specific remediation steps
//!
//! These are fixed per rule; the engine attaches them for UI rendering but
//! never computes them from the scanned document.

use crate::fixes::types::CodeExample;

/// Wrapper-div collapse example attached to the excessive-divs fix
pub fn div_reduction_example() -> CodeExample {
    CodeExample {
        before: "<!-- Common pattern causing bloat -->\n\
                 <div class=\"container\">\n\
                 \x20 <div class=\"row\">\n\
                 \x20   <div class=\"col-12\">\n\
                 \x20     <div class=\"wrapper\">\n\
                 \x20       <div class=\"inner\">\n\
                 \x20         <div class=\"content\">\n\
                 \x20           <p>Your content here</p>\n\
                 \x20         </div>\n\
                 \x20       </div>\n\
                 \x20     </div>\n\
                 \x20   </div>\n\
                 \x20 </div>\n\
                 </div>"
            .to_string(),
        after: "<!-- Optimized structure -->\n\
                <main class=\"container\">\n\
                \x20 <p>Your content here</p>\n\
                </main>"
            .to_string(),
        css_changes: Some(
            "/* Use CSS Grid instead of wrapper divs */\n\
             .container {\n\
             \x20 display: grid;\n\
             \x20 grid-template-columns: 1fr;\n\
             \x20 max-width: 1200px;\n\
             \x20 margin: 0 auto;\n\
             \x20 padding: 0 20px;\n\
             }"
            .to_string(),
        ),
    }
}

/// Nesting-flattening example attached to the deep-nesting fix
pub fn flattening_example() -> CodeExample {
    CodeExample {
        before: "<!-- Deeply nested structure -->\n\
                 <div class=\"level-1\">\n\
                 \x20 <div class=\"level-2\">\n\
                 \x20   <div class=\"level-3\">\n\
                 \x20     <div class=\"level-4\">\n\
                 \x20       <div class=\"level-5\">\n\
                 \x20         <article>Content</article>\n\
                 \x20       </div>\n\
                 \x20     </div>\n\
                 \x20   </div>\n\
                 \x20 </div>\n\
                 </div>"
            .to_string(),
        after: "<!-- Flattened structure -->\n\
                <article class=\"content-article\">\n\
                \x20 Content\n\
                </article>"
            .to_string(),
        css_changes: Some(
            "/* Apply all needed styles directly */\n\
             .content-article {\n\
             \x20 max-width: 800px;\n\
             \x20 margin: 0 auto;\n\
             \x20 padding: 20px;\n\
             \x20 background: #fff;\n\
             }"
            .to_string(),
        ),
    }
}

/// Span-to-pseudo-element example attached to the excessive-spans fix
pub fn span_reduction_example() -> CodeExample {
    CodeExample {
        before: "<!-- Excessive spans -->\n\
                 <nav>\n\
                 \x20 <a href=\"#\">\n\
                 \x20   <span class=\"icon\"></span>\n\
                 \x20   <span class=\"text\">Home</span>\n\
                 \x20   <span class=\"arrow\"></span>\n\
                 \x20 </a>\n\
                 </nav>"
            .to_string(),
        after: "<!-- Use CSS pseudo-elements -->\n\
                <nav>\n\
                \x20 <a href=\"#\" class=\"nav-link\">Home</a>\n\
                </nav>"
            .to_string(),
        css_changes: Some(
            ".nav-link {\n\
             \x20 display: flex;\n\
             \x20 align-items: center;\n\
             }\n\
             .nav-link::before {\n\
             \x20 content: \"\";\n\
             \x20 /* icon styles */\n\
             }\n\
             .nav-link::after {\n\
             \x20 content: \"\\2192\";\n\
             }"
            .to_string(),
        ),
    }
}

/// Sprite-sheet example attached to the SVG fix
pub fn svg_optimization_example() -> CodeExample {
    CodeExample {
        before: "<!-- Inline SVG on every usage -->\n\
                 <svg class=\"icon\" viewBox=\"0 0 24 24\">\n\
                 \x20 <path d=\"M12 0C5.373 0 0 5.373...\"/>\n\
                 </svg>\n\
                 <svg class=\"icon\" viewBox=\"0 0 24 24\">\n\
                 \x20 <path d=\"M12 0C5.373 0 0 5.373...\"/>\n\
                 </svg>"
            .to_string(),
        after: "<!-- SVG sprite (define once) -->\n\
                <svg style=\"display:none\">\n\
                \x20 <symbol id=\"icon-home\" viewBox=\"0 0 24 24\">\n\
                \x20   <path d=\"M12 0C5.373 0 0 5.373...\"/>\n\
                \x20 </symbol>\n\
                </svg>\n\
                \n\
                <!-- Use references -->\n\
                <svg class=\"icon\"><use href=\"#icon-home\"/></svg>\n\
                <svg class=\"icon\"><use href=\"#icon-home\"/></svg>"
            .to_string(),
        css_changes: Some(
            ".icon {\n\
             \x20 width: 24px;\n\
             \x20 height: 24px;\n\
             \x20 fill: currentColor;\n\
             }"
            .to_string(),
        ),
    }
}

/// Wrapper-free form example attached to the form fix
pub fn form_optimization_example() -> CodeExample {
    CodeExample {
        before: "<!-- Form with excessive wrappers -->\n\
                 <form>\n\
                 \x20 <div class=\"form-group\">\n\
                 \x20   <div class=\"form-field\">\n\
                 \x20     <div class=\"input-wrapper\">\n\
                 \x20       <label>Name</label>\n\
                 \x20       <input type=\"text\">\n\
                 \x20     </div>\n\
                 \x20   </div>\n\
                 \x20 </div>\n\
                 </form>"
            .to_string(),
        after: "<!-- Optimized form structure -->\n\
                <form class=\"contact-form\">\n\
                \x20 <label>\n\
                \x20   Name\n\
                \x20   <input type=\"text\" name=\"name\">\n\
                \x20 </label>\n\
                </form>"
            .to_string(),
        css_changes: Some(
            ".contact-form {\n\
             \x20 display: grid;\n\
             \x20 gap: 1rem;\n\
             }\n\
             .contact-form label {\n\
             \x20 display: flex;\n\
             \x20 flex-direction: column;\n\
             \x20 gap: 0.25rem;\n\
             }"
            .to_string(),
        ),
    }
}

/// Builder-specific wrapper-collapse example, for builders we know well
pub fn builder_example(theme_key: &str) -> Option<CodeExample> {
    match theme_key {
        "elementor" => Some(CodeExample {
            before: "<!-- Elementor section output -->\n\
                     <div class=\"elementor-section\">\n\
                     \x20 <div class=\"elementor-container\">\n\
                     \x20   <div class=\"elementor-row\">\n\
                     \x20     <div class=\"elementor-column\">\n\
                     \x20       <div class=\"elementor-column-wrap\">\n\
                     \x20         <div class=\"elementor-widget-wrap\">Content</div>\n\
                     \x20       </div>\n\
                     \x20     </div>\n\
                     \x20   </div>\n\
                     \x20 </div>\n\
                     </div>"
                .to_string(),
            after: "<!-- Container element (Elementor 3.6+) -->\n\
                    <div class=\"e-con\">Content</div>"
                .to_string(),
            css_changes: None,
        }),
        "divi" => Some(CodeExample {
            before: "<!-- Divi module output -->\n\
                     <div class=\"et_pb_section\">\n\
                     \x20 <div class=\"et_pb_row\">\n\
                     \x20   <div class=\"et_pb_column\">\n\
                     \x20     <div class=\"et_pb_module\">Content</div>\n\
                     \x20   </div>\n\
                     \x20 </div>\n\
                     </div>"
                .to_string(),
            after: "<!-- With \"Reduce DOM Size\" enabled -->\n\
                    <div class=\"et_pb_section\">\n\
                    \x20 <div class=\"et_pb_module\">Content</div>\n\
                    </div>"
                .to_string(),
            css_changes: None,
        }),
        _ => None,
    }
}

/// Builder-specific optimization steps, with a generic fallback
pub fn builder_steps(theme_key: &str) -> Vec<String> {
    let steps: &[&str] = match theme_key {
        "elementor" => &[
            "Go to Elementor > Settings > Experiments",
            "Enable \"Optimized DOM Output\" experiment",
            "Enable \"Inline Font Icons\" to reduce DOM",
            "Use Containers instead of Sections (Elementor 3.6+)",
            "Clear Elementor cache after changes",
        ],
        "divi" => &[
            "Go to Divi > Theme Options > Performance",
            "Enable \"Dynamic CSS\" option",
            "Enable \"Static CSS File Generation\"",
            "Consider using Divi's \"Wireframe Mode\" for simpler layouts",
            "Remove unused Divi modules from pages",
        ],
        "wpbakery" => &[
            "Consider migrating to a lighter page builder",
            "Use custom CSS classes instead of nested rows/columns",
            "Minimize use of inner rows",
            "Remove unused WPBakery elements",
        ],
        _ => &[
            "Review the page builder settings for optimization options",
            "Reduce nested sections and columns",
            "Use simpler layouts where possible",
            "Consider custom code for complex layouts",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_builders_carry_examples() {
        assert!(builder_example("elementor").is_some());
        assert!(builder_example("divi").is_some());
        assert!(builder_example("wpbakery").is_none());
        assert!(builder_example("unknown").is_none());
    }

    #[test]
    fn test_builder_steps_fall_back_to_generic_guidance() {
        assert_eq!(builder_steps("elementor").len(), 5);
        assert_eq!(builder_steps("somebuilder").len(), 4);
        assert!(builder_steps("somebuilder")[0].contains("page builder"));
    }

    #[test]
    fn test_examples_show_a_reduction() {
        for example in [
            div_reduction_example(),
            flattening_example(),
            span_reduction_example(),
            form_optimization_example(),
        ] {
            assert!(example.before.matches('<').count() > example.after.matches('<').count());
        }
    }
}
