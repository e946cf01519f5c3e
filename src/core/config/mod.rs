pub mod data;
pub mod io;
pub mod printing;

#[cfg(test)]
mod tests;
