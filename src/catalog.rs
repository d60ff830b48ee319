// SPDX-License-Identifier: MPL-2.0
//! Compiled-in content of Café Gamma: the gallery catalog and the services.
//!
//! Items, filter entries and services are process-wide constants:
//! initialized at compile time, never mutated, never torn down. Their text is
//! authored Hebrew content and is not run through localization.

use crate::domain::gallery::{Catalog, Category, CategoryFilter, Filter, Glyph, MediaId, MediaItem};
use crate::domain::services::Service;

static ITEMS: [MediaItem; 12] = [
    MediaItem {
        id: MediaId(1),
        title: "אספרסו מיוחד",
        category: Category::Drinks,
        media_url: "https://images.unsplash.com/photo-1541167760496-1628856ab772?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "אספרסו איכותי מפולי קפה אורגניים",
    },
    MediaItem {
        id: MediaId(2),
        title: "לאטה אומנותי",
        category: Category::Drinks,
        media_url: "https://images.unsplash.com/photo-1534040385115-33dcb3acba5b?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "לאטה עם ציור אומנותי בקצף",
    },
    MediaItem {
        id: MediaId(3),
        title: "קרואסון שוקולד",
        category: Category::Food,
        media_url: "https://images.unsplash.com/photo-1555507036-ab1f4038808a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "קרואסון טרי במילוי שוקולד",
    },
    MediaItem {
        id: MediaId(4),
        title: "סלט בריאות",
        category: Category::Food,
        media_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "סלט טרי עם ירקות עונתיים",
    },
    MediaItem {
        id: MediaId(5),
        title: "ערב שירה",
        category: Category::Events,
        media_url: "https://images.unsplash.com/photo-1505236858219-8359eb29e329?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "ערב שירה בלייב עם אמנים מקומיים",
    },
    MediaItem {
        id: MediaId(6),
        title: "סדנת קפה",
        category: Category::Events,
        media_url: "https://images.unsplash.com/photo-1511537190424-bbbab87ac5eb?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "סדנה מקצועית להכנת קפה איכותי",
    },
    MediaItem {
        id: MediaId(7),
        title: "חולצת בית הקפה",
        category: Category::Fashion,
        media_url: "https://images.unsplash.com/photo-1503342217505-b0a15ec3261c?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "חולצת כותנה איכותית עם לוגו בית הקפה",
    },
    MediaItem {
        id: MediaId(8),
        title: "כובע מעוצב",
        category: Category::Fashion,
        media_url: "https://images.unsplash.com/photo-1521369909029-2afed882baee?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "כובע אופנתי בעיצוב מיוחד",
    },
    MediaItem {
        id: MediaId(9),
        title: "קפה קר",
        category: Category::Drinks,
        media_url: "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "קפה קר מרענן עם קרח",
    },
    MediaItem {
        id: MediaId(10),
        title: "עוגת שוקולד",
        category: Category::Food,
        media_url: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "עוגת שוקולד ביתית עשירה",
    },
    MediaItem {
        id: MediaId(11),
        title: "תיק בד",
        category: Category::Fashion,
        media_url: "https://images.unsplash.com/photo-1544816155-12df9643f363?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "תיק בד אופנתי עם הדפס מיוחד",
    },
    MediaItem {
        id: MediaId(12),
        title: "הופעה חיה",
        category: Category::Events,
        media_url: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        description: "הופעה חיה של אמנים מקומיים",
    },
];

static FILTERS: [CategoryFilter; 5] = [
    CategoryFilter {
        id: Filter::All,
        label: "הכל",
        icon: None,
    },
    CategoryFilter {
        id: Filter::Only(Category::Drinks),
        label: "משקאות",
        icon: Some(Glyph::Coffee),
    },
    CategoryFilter {
        id: Filter::Only(Category::Food),
        label: "אוכל",
        icon: Some(Glyph::Utensils),
    },
    CategoryFilter {
        id: Filter::Only(Category::Events),
        label: "אירועים",
        icon: Some(Glyph::Calendar),
    },
    CategoryFilter {
        id: Filter::Only(Category::Fashion),
        label: "אופנה",
        icon: Some(Glyph::Shirt),
    },
];

static SERVICES: [Service; 8] = [
    Service {
        glyph: "☕",
        title: "קפה איכותי",
        description: "מבחר קפה משובח מרחבי העולם, נטחן טרי במקום ומוגש בסגנון אופנתי",
        image_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
    },
    Service {
        glyph: "🫘",
        title: "טעימות קפה",
        description: "סדנאות טעימות קפה בהנחיית בריסטות מקצועיים, המשלבות טרנדים עדכניים מעולם האופנה",
        image_url: "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?ixlib=rb-4.0.3&auto=format&fit=crop&w=687&q=80",
    },
    Service {
        glyph: "🍴",
        title: "מנות שף אופנתיות",
        description: "תפריט מתחלף של מנות שף מעוצבות בהשראת עולם האופנה העכשווי",
        image_url: "https://images.unsplash.com/photo-1484980972926-edee96e0960d?ixlib=rb-4.0.3&auto=format&fit=crop&w=687&q=80",
    },
    Service {
        glyph: "🍰",
        title: "קינוחים מעוצבים",
        description: "קינוחים ייחודיים בעיצוב אופנתי המשתנים בהתאם לעונות השנה ולטרנדים",
        image_url: "https://images.unsplash.com/photo-1488477304112-4944851de03d?ixlib=rb-4.0.3&auto=format&fit=crop&w=687&q=80",
    },
    Service {
        glyph: "👕",
        title: "פינת אופנה",
        description: "פינה ייחודית המציגה פריטי אופנה מעצבים מקומיים לצד ספרי אופנה וכתבי עת",
        image_url: "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
    },
    Service {
        glyph: "📅",
        title: "אירועי אופנה",
        description: "אירועים ומפגשים בנושאי אופנה וקפה, כולל תצוגות אופנה מקומיות ובינלאומיות",
        image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
    },
    Service {
        glyph: "📶",
        title: "סביבת עבודה",
        description: "חלל עבודה מעוצב עם WiFi מהיר, שקעים ותאורה מותאמת לעבודה ממושכת",
        image_url: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?ixlib=rb-4.0.3&auto=format&fit=crop&w=1447&q=80",
    },
    Service {
        glyph: "🥤",
        title: "קפה לקחת",
        description: "אריזות קפה מעוצבות לקחת הביתה, בעיצובים מתחלפים בהשראת עולם האופנה",
        image_url: "https://images.unsplash.com/photo-1589401806207-2381455bce36?ixlib=rb-4.0.3&auto=format&fit=crop&w=687&q=80",
    },
];

/// The café's catalog.
#[must_use]
pub fn cafe() -> Catalog {
    Catalog::new(&ITEMS, &FILTERS)
}

/// Full ordered item list of the café catalog.
#[must_use]
pub fn items() -> &'static [MediaItem] {
    &ITEMS
}

/// Full ordered filter list of the café catalog.
#[must_use]
pub fn filters() -> &'static [CategoryFilter] {
    &FILTERS
}

/// Services of the café, in display order.
#[must_use]
pub fn services() -> &'static [Service] {
    &SERVICES
}
