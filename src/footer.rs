//! Footer content shown at the bottom of every console page.
//!
//! The content is rebuilt on every render: a copyright line carrying the
//! current year and a fixed, ordered list of outbound links.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{SystemClock, TimeSource};

/// Name of the system shown after the year in the copyright line.
pub const SYSTEM_NAME: &str = "微信公众号管理系统";

/// Inline style handed to the footer element as-is. Leptos appends the
/// trailing `;` itself.
pub const FOOTER_STYLE: &str = "background: none";

/// Glyphs that can decorate a link label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Github,
}

/// Displayable label of a footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LinkTitle {
    Text { text: String },
    Decorated { icon: IconGlyph, text: String },
}

impl LinkTitle {
    pub fn text(&self) -> &str {
        match self {
            LinkTitle::Text { text } | LinkTitle::Decorated { text, .. } => text,
        }
    }

    pub fn icon(&self) -> Option<IconGlyph> {
        match self {
            LinkTitle::Text { .. } => None,
            LinkTitle::Decorated { icon, .. } => Some(*icon),
        }
    }
}

/// One footer hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub key: String,
    pub title: LinkTitle,
    pub href: String,
    pub open_in_new_tab: bool,
}

/// Everything the footer renderer needs for one render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub copyright_text: String,
    pub links: Vec<LinkEntry>,
}

pub fn copyright_text(year: i32) -> String {
    format!("{} {}", year, SYSTEM_NAME)
}

/// The footer links in display order.
pub fn footer_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry {
            key: "wechat-docs".to_string(),
            title: LinkTitle::Text {
                text: "微信文档".to_string(),
            },
            href: "https://developers.weixin.qq.com/doc/offiaccount/Getting_Started/Overview.html"
                .to_string(),
            open_in_new_tab: true,
        },
        LinkEntry {
            key: "wx-java".to_string(),
            title: LinkTitle::Text {
                text: "WxJava".to_string(),
            },
            href: "https://github.com/Wechat-Group/WxJava".to_string(),
            open_in_new_tab: true,
        },
        LinkEntry {
            key: "alma-mater".to_string(),
            title: LinkTitle::Decorated {
                icon: IconGlyph::Github,
                text: "母校".to_string(),
            },
            href: "http://www.nxist.com/".to_string(),
            open_in_new_tab: true,
        },
    ]
}

/// Builds [`FooterContent`] from the current time of a [`TimeSource`].
#[derive(Clone, Debug, Default)]
pub struct FooterContentBuilder<C = SystemClock> {
    clock: C,
}

impl FooterContentBuilder<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: TimeSource> FooterContentBuilder<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The year is read from the clock on every call, never cached.
    pub fn build(&self) -> FooterContent {
        let year = self.clock.now().year();
        debug!("Building footer content for year {}", year);

        FooterContent {
            copyright_text: copyright_text(year),
            links: footer_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn build_on(year: i32, month: u32, day: u32) -> FooterContent {
        let clock = FixedClock::at(year, month, day).expect("valid test date");
        FooterContentBuilder::with_clock(clock).build()
    }

    #[test]
    fn test_copyright_text_scenarios() {
        assert_eq!(build_on(2024, 3, 15).copyright_text, "2024 微信公众号管理系统");
        assert_eq!(build_on(2025, 1, 1).copyright_text, "2025 微信公众号管理系统");
    }

    #[test]
    fn test_copyright_year_stable_within_year() {
        let times = [
            (1, 1, 0, 0, 0),
            (6, 30, 12, 30, 0),
            (12, 31, 23, 59, 59),
        ];

        for (month, day, hour, minute, second) in times {
            let at = NaiveDate::from_ymd_opt(2024, month, day)
                .and_then(|d| d.and_hms_opt(hour, minute, second))
                .unwrap();
            let content = FooterContentBuilder::with_clock(FixedClock::new(at)).build();
            assert_eq!(content.copyright_text, "2024 微信公众号管理系统");
        }
    }

    #[test]
    fn test_year_boundary_changes_only_year() {
        let before = build_on(2024, 12, 31);
        let after = build_on(2025, 1, 1);

        assert_ne!(before.copyright_text, after.copyright_text);
        assert_eq!(
            before.copyright_text.trim_start_matches("2024"),
            after.copyright_text.trim_start_matches("2025")
        );
        assert!(before.copyright_text.ends_with(SYSTEM_NAME));
        assert!(after.copyright_text.ends_with(SYSTEM_NAME));
        assert_eq!(before.links, after.links);
    }

    #[test]
    fn test_links_fixed_order() {
        let content = build_on(2024, 3, 15);
        let keys: Vec<&str> = content.links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["wechat-docs", "wx-java", "alma-mater"]);

        assert_eq!(content.links[0].title.text(), "微信文档");
        assert_eq!(content.links[1].title.text(), "WxJava");
        assert_eq!(content.links[2].title.text(), "母校");
        assert_eq!(content.links[2].title.icon(), Some(IconGlyph::Github));
        assert_eq!(content.links[0].title.icon(), None);
    }

    #[test]
    fn test_links_are_absolute_urls_opening_new_tab() {
        for link in footer_links() {
            assert!(!link.href.is_empty());
            let parsed = url::Url::parse(&link.href)
                .unwrap_or_else(|e| panic!("{} has invalid href: {}", link.key, e));
            assert!(matches!(parsed.scheme(), "http" | "https"));
            assert!(parsed.host_str().is_some());
            assert!(link.open_in_new_tab, "{} should open in a new tab", link.key);
        }
    }

    #[test]
    fn test_link_keys_unique() {
        let links = footer_links();
        let keys: HashSet<&str> = links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys.len(), links.len());
    }

    #[test]
    fn test_build_is_deterministic_for_same_instant() {
        let builder = FooterContentBuilder::with_clock(FixedClock::at(2024, 3, 15).unwrap());
        let first = serde_json::to_vec(&builder.build()).unwrap();
        let second = serde_json::to_vec(&builder.build()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_system_clock_builder_uses_system_name() {
        let content = FooterContentBuilder::new().build();
        let (year, name) = content.copyright_text.split_once(' ').unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.parse::<i32>().is_ok());
        assert_eq!(name, SYSTEM_NAME);
        assert_eq!(content.links.len(), 3);
    }

    #[test]
    fn test_footer_content_serialized_field_names() {
        let value = serde_json::to_value(build_on(2024, 3, 15)).unwrap();

        assert_eq!(value["copyrightText"], "2024 微信公众号管理系统");
        assert_eq!(value["links"][0]["key"], "wechat-docs");
        assert_eq!(value["links"][0]["openInNewTab"], true);
        assert_eq!(value["links"][0]["title"]["kind"], "text");
        assert_eq!(value["links"][2]["title"]["kind"], "decorated");
        assert_eq!(value["links"][2]["title"]["icon"], "github");
    }
}
