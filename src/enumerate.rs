//! Enumeration of every configuration the audit covers.

use crate::options::{Configuration, Contrast, Cursor, DiagnosticOpacity, Selection, Workbench};

/// High-contrast flag values, in enumeration order.
const HIGH_CONTRAST: [bool; 2] = [false, true];

/// Number of configurations produced by [`configurations`].
pub const CONFIGURATION_COUNT: usize = Contrast::ALL.len()
    * Workbench::ALL.len()
    * Selection::ALL.len()
    * Cursor::ALL.len()
    * DiagnosticOpacity::ALL.len()
    * HIGH_CONTRAST.len();

/// Italics options are held fixed: keywords upright, comments italic.
const ITALIC_KEYWORDS: bool = false;
const ITALIC_COMMENTS: bool = true;

/// Every combination of contrast, workbench, selection, cursor, diagnostic
/// opacity and high-contrast flag.
///
/// Nested outer-to-inner in that order, so the sequence is identical between
/// runs and reports stay stable.
pub fn configurations() -> Vec<Configuration> {
    let mut configs = Vec::with_capacity(CONFIGURATION_COUNT);

    for contrast in Contrast::ALL {
        for workbench in Workbench::ALL {
            for selection in Selection::ALL {
                for cursor in Cursor::ALL {
                    for opacity in DiagnosticOpacity::ALL {
                        for high_contrast in HIGH_CONTRAST {
                            configs.push(Configuration {
                                contrast: contrast.into(),
                                workbench,
                                selection,
                                cursor,
                                diagnostic_text_background_opacity: opacity,
                                italic_keywords: ITALIC_KEYWORDS,
                                italic_comments: ITALIC_COMMENTS,
                                high_contrast,
                            });
                        }
                    }
                }
            }
        }
    }

    configs
}
