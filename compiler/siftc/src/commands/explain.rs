//! The `explain` command: display documentation for error codes.

use sift_diagnostic::{ErrorCode, ErrorDocs};

/// Print the documentation for `code_str`, or exit with an error.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.summary());
        }
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code}: {}", code.summary());
        std::process::exit(1);
    }
}
