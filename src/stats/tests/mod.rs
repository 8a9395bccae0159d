mod availability;
mod utils;
