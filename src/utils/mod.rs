pub mod diagnostics;
pub mod input;
#[cfg(test)]
pub mod test_utils;
pub mod url;
