use std::io::Cursor;

use chrono::Utc;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::SiteConfig;
use crate::error::{PostbuildError, Result};
use crate::metadata::Post;

/// RFC-822-style layout for `lastBuildDate`.
const RFC822: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Post dates carry no time of day; items publish at midnight UTC.
const RFC822_MIDNIGHT: &str = "%a, %d %b %Y 00:00:00 +0000";

/// Render the RSS 2.0 feed for the given posts, newest first.
pub fn generate_rss(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let base = config.site.base_url.trim_end_matches('/');
    let channel_link = format!("{}{}", base, config.feed.channel_path);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:atom", "http://www.w3.org/2005/Atom"));
    rss.push_attribute(("xmlns:media", "http://search.yahoo.com/mrss/"));
    write(&mut writer, Event::Start(rss))?;
    write(&mut writer, Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &config.site.title)?;
    write_text_element(&mut writer, "link", &channel_link)?;

    let self_href = format!("{}/{}", base, config.feed.file);
    let mut self_link = BytesStart::new("atom:link");
    self_link.push_attribute(("href", self_href.as_str()));
    self_link.push_attribute(("rel", "self"));
    self_link.push_attribute(("type", "application/rss+xml"));
    write(&mut writer, Event::Empty(self_link))?;

    write_text_element(&mut writer, "description", &config.site.description)?;
    write_text_element(&mut writer, "language", &config.site.language)?;
    write_text_element(
        &mut writer,
        "lastBuildDate",
        &Utc::now().format(RFC822).to_string(),
    )?;

    write(&mut writer, Event::Start(BytesStart::new("image")))?;
    write_text_element(&mut writer, "url", &format!("{}{}", base, config.feed.image))?;
    write_text_element(&mut writer, "title", &config.site.title)?;
    write_text_element(&mut writer, "link", &channel_link)?;
    write(&mut writer, Event::End(BytesEnd::new("image")))?;

    for post in posts {
        write_item(&mut writer, config, base, post)?;
    }

    write(&mut writer, Event::End(BytesEnd::new("channel")))?;
    write(&mut writer, Event::End(BytesEnd::new("rss")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| PostbuildError::Feed(format!("encoding error: {e}")))
}

fn write_item(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    config: &SiteConfig,
    base: &str,
    post: &Post,
) -> Result<()> {
    let link = format!("{}{}", base, post.slug);

    write(writer, Event::Start(BytesStart::new("item")))?;
    write_cdata_element(writer, "title", &post.title)?;
    write_text_element(writer, "link", &link)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "false"));
    write(writer, Event::Start(guid))?;
    write(writer, Event::Text(BytesText::new(&link)))?;
    write(writer, Event::End(BytesEnd::new("guid")))?;

    write_text_element(
        writer,
        "pubDate",
        &post.date.format(RFC822_MIDNIGHT).to_string(),
    )?;
    write_cdata_element(writer, "description", &post.description)?;

    let image_url = format!("{}{}{}.png", base, config.feed.item_image_dir, post.slug);
    let mut media = BytesStart::new("media:content");
    media.push_attribute(("url", image_url.as_str()));
    media.push_attribute(("medium", "image"));
    write(writer, Event::Empty(media))?;

    write(writer, Event::End(BytesEnd::new("item")))
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| PostbuildError::Feed(format!("write error: {e}")))
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(tag)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(tag)))
}

fn write_cdata_element(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(tag)))?;
    write(writer, Event::CData(BytesCData::new(text)))?;
    write(writer, Event::End(BytesEnd::new(tag)))
}
