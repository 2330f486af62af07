#[cfg(test)]
mod common;

#[cfg(test)]
mod catalog_client_tests;

#[cfg(test)]
mod rest_tests;
