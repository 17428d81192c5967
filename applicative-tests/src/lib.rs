pub mod game;
pub mod page;
pub mod signup;

#[cfg(test)]
mod lifting;

#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
