/// Module containing the Supabase client handle
pub mod supabase;

pub use supabase::*;
