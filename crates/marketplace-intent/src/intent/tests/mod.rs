mod common;
mod cta;
