pub mod tag_chips;
pub mod free_text_tag_field;
pub mod skill_autocomplete;
