pub mod cube;
pub mod history;
pub mod r#move;
pub mod scramble;

pub mod prelude;

#[cfg(test)]
mod test;
