pub mod upload_asset;
