/// Builds the comment placed at the top of every generated page so readers
/// know not to edit it by hand.
pub fn code_gen_comment(generator_name: &str) -> String {
    format!("DO NOT EDIT: generated by {generator_name}")
}

/// The file name of the page documenting a DTO, enum or method.
pub fn page_file_name(type_name: &str) -> String {
    format!("{type_name}.md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_gen_comment_without_name() {
        assert_eq!(code_gen_comment(""), "DO NOT EDIT: generated by ");
        assert_eq!(code_gen_comment("fsdgenmd"), "DO NOT EDIT: generated by fsdgenmd");
    }
}
