//! Forest Night theme tables and the contrast audit that guards them.
//!
//! The audit walks every reachable combination of theme options, asks a
//! [`theme::ThemeSource`] for the resulting colors, and checks each
//! foreground/background pair against a WCAG 2.x contrast threshold.

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod enumerate;
pub mod logging;
pub mod options;
pub mod report;
pub mod resolve;
pub mod theme;
