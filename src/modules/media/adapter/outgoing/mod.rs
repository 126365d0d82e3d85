pub mod media_store_gcs;
