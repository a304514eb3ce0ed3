//! Review suggestions derived from the categorized change set.

use super::categorize::{FileCategories, FileCategory};
use super::classify::PrType;

/// Build the advisory list for a change set.
///
/// Rules are independent and evaluated in a fixed order; every rule whose
/// condition holds contributes its message(s).
pub fn suggestions(categories: &FileCategories, pr_type: PrType) -> Vec<String> {
    let mut out = Vec::new();

    if !categories.is_empty(FileCategory::Components) {
        out.push("Add before/after screenshots for visual component changes".to_string());
        out.push("Verify accessibility (keyboard navigation, ARIA attributes) of touched components".to_string());
    }

    if !categories.is_empty(FileCategory::Hooks) {
        out.push("Ensure changed hooks are covered by unit tests".to_string());
    }

    if !categories.is_empty(FileCategory::Utils) {
        out.push("Aim for full test coverage on utility functions".to_string());
    }

    if categories.is_empty(FileCategory::Tests) && pr_type != PrType::Docs {
        out.push("⚠️ No test files changed — consider adding or updating tests".to_string());
    }

    if !categories.is_empty(FileCategory::Types) {
        out.push("Update type documentation if public interfaces changed".to_string());
    }

    if !categories.is_empty(FileCategory::Styles) {
        out.push("Check responsive behavior across breakpoints".to_string());
        out.push("Verify dark mode rendering of style changes".to_string());
    }

    out
}
