pub mod alternatives {
    pub mod plain_array;
}
pub mod helpers;
pub mod profile;
