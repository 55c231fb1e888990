/// small demonstration networks built in memory and printed as tables
pub mod translation_examples;
