pub fn base_url() -> String {
    "http://localhost:3000".to_string()
}

pub fn language() -> String {
    "en-gb".to_string()
}

pub fn output_dir() -> String {
    "dist".to_string()
}

pub fn metadata_file() -> String {
    "metadata.json".to_string()
}

pub fn feed_file() -> String {
    "feed.xml".to_string()
}

pub fn channel_path() -> String {
    "/blog".to_string()
}

pub fn channel_image() -> String {
    "/images/icon.png".to_string()
}

pub fn item_image_dir() -> String {
    "/images".to_string()
}
