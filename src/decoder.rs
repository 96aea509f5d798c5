pub mod peeling;
