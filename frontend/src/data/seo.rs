//! Per-page SEO metadata, applied on every route change, plus the JSON-LD
//! structured data injected once at startup.

use crate::router::PageId;
use serde_json::json;

pub const SITE_NAME: &str = "SUNAME Music";
pub const SITE_URL: &str = "https://sunamemusic.com";

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn page_meta(page_id: PageId) -> PageMeta {
    match page_id {
        PageId::Home => PageMeta {
            title: "SUNAME - Electronic Music Artist & DJ | Tech House, Melodic Techno, Techno",
            description: "Official website of SUNAME - Electronic music artist and DJ from Florida \
                          specializing in Tech House, Melodic Techno, and Techno. Experience the \
                          SUNAME WAVE movement.",
        },
        PageId::Bookings => PageMeta {
            title: "Book SUNAME - DJ Bookings & Live Performances",
            description: "Book SUNAME for your next event. Professional DJ services for clubs, \
                          festivals, private events, and corporate functions.",
        },
        PageId::Contact => PageMeta {
            title: "Contact SUNAME - Management, Bookings & General Inquiries",
            description: "Get in touch with SUNAME for bookings, management, and general inquiries.",
        },
        PageId::Demos => PageMeta {
            title: "Submit Demos to SUNAME - Demo Submissions",
            description: "Submit your demos to SUNAME. Tech House, Melodic Techno, and Techno \
                          producers welcome.",
        },
        PageId::Tour => PageMeta {
            title: "SUNAME Tour Dates - Upcoming Live Performances & Events",
            description: "Check out SUNAME's upcoming tour dates and live performances.",
        },
        PageId::Interviews => PageMeta {
            title: "SUNAME Interviews - Press & Media Features",
            description: "Interviews and media features with electronic music artist SUNAME.",
        },
        PageId::Mixes => PageMeta {
            title: "SUNAME Live Mixes - DJ Sets & Electronic Music Mixes",
            description: "Listen to SUNAME's live DJ mixes and electronic music sets.",
        },
        PageId::Music => PageMeta {
            title: "SUNAME Music - Latest Tracks & Releases",
            description: "Listen to SUNAME's latest electronic music tracks, live sets, and \
                          releases on SoundCloud, Spotify, and Apple Music.",
        },
        PageId::Epk => PageMeta {
            title: "SUNAME EPK - Electronic Press Kit",
            description: "SUNAME's electronic press kit: biography, photos, music, and booking \
                          information for promoters and press.",
        },
        PageId::WaveEvents => PageMeta {
            title: "SUNAME WAVE Events - The Movement",
            description: "SUNAME WAVE events: emotional release through dance culture.",
        },
        PageId::NotFound => PageMeta {
            title: "Page Not Found | SUNAME Music",
            description: "The page you are looking for does not exist.",
        },
    }
}

/// Best-effort head updates; a missing document or meta tag degrades to a
/// stale title, never an error.
pub fn apply_page_metadata(page_id: PageId) {
    let meta = page_meta(page_id);
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(meta.title);
    if let Ok(Some(description_tag)) = document.query_selector("meta[name='description']") {
        let _ = description_tag.set_attribute("content", meta.description);
    }
}

/// Person + website JSON-LD, appended to `<head>` once at startup.
pub fn inject_structured_data() {
    let data = json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "MusicGroup",
                "name": "SUNAME",
                "genre": ["Tech House", "Melodic Techno", "Techno"],
                "url": SITE_URL,
                "sameAs": crate::data::biography::BIOGRAPHY
                    .socials
                    .iter()
                    .map(|link| link.url)
                    .collect::<Vec<_>>(),
            },
            {
                "@type": "WebSite",
                "name": SITE_NAME,
                "url": SITE_URL,
            },
        ],
    });

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(head) = document.head() else { return };
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let _ = script.set_attribute("type", "application/ld+json");
    script.set_text_content(Some(&data.to_string()));
    let _ = head.append_child(&script);
}
