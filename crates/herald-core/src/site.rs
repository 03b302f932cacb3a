//! The site's hand-curated route catalogue.
//!
//! One entry per logical page. Entries only set the optional fields they
//! want to override; everything else comes from [`default_record`].

use crate::error::Result;
use crate::record::MetadataRecord;
use crate::table::RouteMetadataTable;

/// Host name canonical URLs are emitted under unless configured otherwise.
pub const PREFERRED_HOST: &str = "www.lumenhouse.org";

const OG_DEFAULT: &str = "/images/og/lumen-house-og.webp";
const TWITTER_DEFAULT: &str = "/images/og/lumen-house-twitter.webp";

/// The fallback record for unmatched paths and missing fields.
pub fn default_record() -> MetadataRecord {
    MetadataRecord::new(
        "Lumen House | Lighting the Way for Families",
        "Lumen House is a community nonprofit offering education, mentorship \
         and family support programs, funded in part by our hand-poured candle shop.",
    )
    .with_keywords(
        "Lumen House, nonprofit, community programs, youth mentorship, \
         family support, education, volunteer, donate, candles",
    )
    .with_social_image(OG_DEFAULT)
    .with_secondary_image(TWITTER_DEFAULT)
}

/// Build the route table for the whole site.
pub fn site_table() -> Result<RouteMetadataTable> {
    RouteMetadataTable::builder(default_record())
        // Home
        .route(
            "/",
            MetadataRecord::new(
                "Lumen House | Community Nonprofit",
                "Education, mentorship and family support for our neighbors. \
                 Learn about our programs, our impact and how to get involved.",
            )
            .with_social_image("/images/og/home.webp"),
        )
        // About
        .route(
            "/about/mission",
            MetadataRecord::new(
                "Our Mission | Lumen House",
                "Why Lumen House exists and the values that guide every program we run.",
            )
            .with_keywords("Lumen House mission, nonprofit values, community vision"),
        )
        .route(
            "/about/history",
            MetadataRecord::new(
                "Our History | Lumen House",
                "From a single kitchen-table tutoring group to a community-wide nonprofit.",
            )
            .with_keywords("Lumen House history, nonprofit founding, milestones"),
        )
        .route(
            "/about/founder",
            MetadataRecord::new(
                "Our Founder | Lumen House",
                "Meet the founder of Lumen House and hear the story behind the candle.",
            )
            .with_social_image("/images/og/founder.webp"),
        )
        .route(
            "/about/team",
            MetadataRecord::new(
                "Team & Board | Lumen House",
                "The staff, volunteers and board members who keep Lumen House running.",
            )
            .with_keywords("Lumen House team, board of directors, staff"),
        )
        .route(
            "/about/partners",
            MetadataRecord::new(
                "Partners | Lumen House",
                "Schools, businesses and foundations that partner with Lumen House.",
            )
            .with_keywords("nonprofit partners, community partners, sponsors"),
        )
        // Programs
        .route(
            "/programs",
            MetadataRecord::new(
                "Programs | Lumen House",
                "Explore our education, mentorship, family support and workforce programs.",
            )
            .with_keywords("community programs, youth programs, family programs"),
        )
        .route(
            "/programs/education",
            MetadataRecord::new(
                "Education Program | Lumen House",
                "After-school tutoring, literacy circles and homework help for K-12 students.",
            )
            .with_keywords("tutoring, literacy, after-school program, homework help")
            .with_social_image("/images/og/programs-education.webp"),
        )
        .route(
            "/programs/mentorship",
            MetadataRecord::new(
                "Youth Mentorship | Lumen House",
                "One-on-one mentoring that pairs young people with caring adult role models.",
            )
            .with_keywords("youth mentorship, mentoring program, role models"),
        )
        .route(
            "/programs/family-support",
            MetadataRecord::new(
                "Family Support | Lumen House",
                "Case management, pantry access and parenting workshops for local families.",
            )
            .with_keywords("family support, food pantry, parenting workshops"),
        )
        .route(
            "/programs/workforce",
            MetadataRecord::new(
                "Workforce Readiness | Lumen House",
                "Job skills training and paid apprenticeships in our candle workshop.",
            )
            .with_keywords("job training, apprenticeship, workforce readiness"),
        )
        // Impact
        .route(
            "/impact",
            MetadataRecord::new(
                "Our Impact | Lumen House",
                "The numbers and the people behind a year of Lumen House programs.",
            )
            .with_social_image("/images/og/impact.webp"),
        )
        .route(
            "/impact/stories",
            MetadataRecord::new(
                "Impact Stories | Lumen House",
                "First-hand stories from students, families and volunteers.",
            )
            .with_keywords("success stories, testimonials, community impact"),
        )
        .route(
            "/impact/reports",
            MetadataRecord::new(
                "Annual Reports | Lumen House",
                "Annual reports and financial statements for Lumen House.",
            )
            .with_keywords("annual report, financials, nonprofit transparency"),
        )
        // Get involved
        .route(
            "/get-involved",
            MetadataRecord::new(
                "Get Involved | Lumen House",
                "Volunteer, donate, attend an event or partner with Lumen House.",
            )
            .with_keywords("get involved, volunteer, donate, events"),
        )
        .route(
            "/get-involved/volunteer",
            MetadataRecord::new(
                "Volunteer | Lumen House",
                "Tutor, mentor or help in the pantry. Find a volunteer role that fits.",
            )
            .with_keywords("volunteer opportunities, tutor volunteer, mentor volunteer"),
        )
        .route(
            "/get-involved/donate",
            MetadataRecord::new(
                "Donate | Lumen House",
                "Your gift funds tutoring, mentoring and family support in our community.",
            )
            .with_keywords("donate, nonprofit donation, give")
            .with_social_image("/images/og/donate.webp")
            .with_secondary_image("/images/og/donate-twitter.webp"),
        )
        .route(
            "/get-involved/events",
            MetadataRecord::new(
                "Events | Lumen House",
                "Upcoming fundraisers, workshops and community gatherings.",
            )
            .with_keywords("nonprofit events, fundraisers, community events"),
        )
        // Media
        .route(
            "/media",
            MetadataRecord::new(
                "Media & Press | Lumen House",
                "Press coverage, photo galleries and media resources.",
            )
            .with_keywords("press, media kit, news"),
        )
        // Candle shop
        .route(
            "/candle-shop",
            MetadataRecord::new(
                "Candle Shop | Lumen House",
                "Hand-poured soy candles. Every purchase supports our programs.",
            )
            .with_keywords("soy candles, hand-poured candles, shop for a cause")
            .with_social_image("/images/og/candle-shop.webp")
            .with_secondary_image("/images/og/candle-shop-twitter.webp"),
        )
        .route(
            "/candle-shop/signature",
            MetadataRecord::new(
                "Signature Collection | Lumen House Candle Shop",
                "Our year-round signature scents, poured by workforce apprentices.",
            )
            .with_keywords("signature candles, soy candles"),
        )
        .route(
            "/candle-shop/seasonal",
            MetadataRecord::new(
                "Seasonal Collection | Lumen House Candle Shop",
                "Limited-run seasonal scents, available while supplies last.",
            )
            .with_keywords("seasonal candles, limited edition candles"),
        )
        .route(
            "/candle-shop/gift-sets",
            MetadataRecord::new(
                "Gift Sets | Lumen House Candle Shop",
                "Candle gift sets for holidays, teachers and corporate giving.",
            )
            .with_keywords("candle gift sets, corporate gifts"),
        )
        // Contact
        .route(
            "/contact",
            MetadataRecord::new(
                "Contact Us | Lumen House",
                "Questions about programs, volunteering or orders? Get in touch.",
            )
            .with_keywords("contact Lumen House, nonprofit contact"),
        )
        .build()
}
