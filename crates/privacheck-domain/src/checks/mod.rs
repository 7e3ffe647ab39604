use crate::model::PolicyText;
use privacheck_types::Check;

mod child_privacy;
mod contact;
mod cookie;
mod date;
mod keyword;
mod length;
mod utils;

#[cfg(test)]
mod tests;

/// Run every check in catalog order: keyword rules first, then the heuristics.
pub fn run_all(text: &PolicyText<'_>, out: &mut Vec<Check>) {
    keyword::run(text, out);
    length::run(text, out);
    cookie::run(text, out);
    date::run(text, out);
    contact::run(text, out);
    child_privacy::run(text, out);
}
