use super::*;

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no documentation");
    }
}

#[test]
fn test_docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}")),
            "{code} docs should open with a `# {code}` heading"
        );
    }
}
