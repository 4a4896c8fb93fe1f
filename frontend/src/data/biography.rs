//! Artist biography and link data.

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct Mix {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub struct Biography {
    pub name: &'static str,
    pub location: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub full_bio: &'static [&'static str],
    pub motto: &'static str,
    pub genres: &'static [&'static str],
    pub movement_name: &'static str,
    pub quote: &'static str,
    pub socials: &'static [SocialLink],
    pub mixes: &'static [Mix],
    pub booking_email: &'static str,
    pub management_email: &'static str,
    pub demo_link: &'static str,
    pub designer_name: &'static str,
    pub designer_link: &'static str,
}

pub static BIOGRAPHY: Biography = Biography {
    name: "SUNAME",
    location: "Florida",
    tagline: "Within every dark realm, there is light – SUNAME",
    bio: "SUNAME is not just a DJ/PRODUCER — he's the architect of a movement. \
          Raised in the cultural chaos of Florida, and raised in his teens in New York, \
          with deep musical roots from his DJ father and R&B singer-songwriter mother, \
          SUNAME blends his heritage into a fresh and futuristic take on Tech House, \
          Minimal Tech, and Techno.",
    full_bio: &[
        "His performances aren't just sets — they're experiences. The SUNAME WAVE was \
         born to bring light into dark places. Whether it's heartbreak, depression, or \
         personal struggles — the wave is a release. It's energy. It's healing. From \
         low-frequency vibes to euphoric drops, SUNAME lifts the crowd and leaves them \
         glowing.",
        "Wavers, not ravers — that's his tribe. People come to escape and elevate, and \
         SUNAME gives them more than music — he gives them a true moment that matters.",
    ],
    motto: "WE ARE NOT RAVERS, WE ARE WAVERS. WE FLOOD CITIES THEN BRING PURE SUNLIGHT",
    genres: &["Tech House", "Melodic Techno", "Techno"],
    movement_name: "SUNAME WAVE",
    quote: "SUNAME doesn't just play music. He guides you through the dark, until the sun comes up.",
    socials: &[
        SocialLink { name: "SoundCloud", url: "https://soundcloud.com/sunamemusic" },
        SocialLink { name: "Instagram", url: "https://www.instagram.com/sunamemusic/" },
        SocialLink { name: "Twitter", url: "https://x.com/sunamemusic" },
        SocialLink { name: "TikTok", url: "https://www.tiktok.com/@sunamemusic" },
        SocialLink { name: "YouTube", url: "https://www.youtube.com/@sunamemusic" },
        SocialLink { name: "Spotify", url: "https://open.spotify.com/artist/1iSs6VT8Pi1pQ85ffnrLlZ" },
        SocialLink { name: "Apple Music", url: "https://music.apple.com/us/artist/suname/1755948288" },
    ],
    mixes: &[Mix {
        title: "The Genesis Mix",
        description: "The inaugural mix, setting the foundation for the SUNAME WAVE.",
        url: "https://soundcloud.com/sunamemusic/the-genesis-mix-example",
    }],
    booking_email: "sunamebookings@gmail.com",
    management_email: "sunamemusicmgmt@gmail.com",
    demo_link: "https://tstack.app/sunamemusic",
    designer_name: "JimmyDesigns",
    designer_link: "https://x.com/Jamez_Designs",
};
