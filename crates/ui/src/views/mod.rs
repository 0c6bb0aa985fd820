mod home;
mod results;

pub use home::HomeView;
pub use results::ResultsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
