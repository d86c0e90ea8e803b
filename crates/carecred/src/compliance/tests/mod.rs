mod common;
mod rollup;
mod status;
