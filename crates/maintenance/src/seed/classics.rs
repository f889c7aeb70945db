//! The fixed seed list of world classics.

use time::{Date, macros::date};

/// Shared category every seeded work is filed under.
pub const CLASSICS_CATEGORY: &str = "Dünya Klasikleri";
pub const CLASSICS_CATEGORY_DESCRIPTION: &str = "Dünya edebiyatının en önemli klasik eserleri.";

/// Copies recorded for each newly seeded work.
pub const SEED_COPIES: i32 = 3;

#[derive(Debug, Clone, Copy)]
pub struct ClassicAuthor {
    pub name: &'static str,
    pub birth_date: Option<Date>,
    pub biography: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassicWork {
    pub title: &'static str,
    pub author: ClassicAuthor,
    pub isbn: &'static str,
    pub publication_date: Date,
    pub description: &'static str,
    pub page_count: i32,
    pub language: &'static str,
    pub publisher: &'static str,
    pub cover_image_url: Option<&'static str>,
}

pub const CLASSIC_WORKS: &[ClassicWork] = &[
    ClassicWork {
        title: "Suç ve Ceza",
        author: ClassicAuthor {
            name: "Fyodor Dostoyevski",
            birth_date: Some(date!(1821 - 11 - 11)),
            biography: "Rus yazar ve düşünür. Psikolojik derinliği olan romanlarıyla tanınır.",
        },
        isbn: "9789750719387",
        publication_date: date!(1866 - 01 - 01),
        description: "Raskolnikov adlı yoksul bir öğrencinin işlediği cinayet ve sonrasında yaşadığı psikolojik çöküşü anlatan roman.",
        page_count: 687,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000064552-1.jpg"),
    },
    ClassicWork {
        title: "Sefiller",
        author: ClassicAuthor {
            name: "Victor Hugo",
            birth_date: Some(date!(1802 - 02 - 26)),
            biography: "Fransız yazar, şair ve politikacı. Romantik akımın öncülerinden.",
        },
        isbn: "9789750738609",
        publication_date: date!(1862 - 01 - 01),
        description: "Jean Valjean'ın hikayesi üzerinden 19. yüzyıl Fransa'sındaki sosyal adaletsizliği anlatan epik roman.",
        page_count: 1724,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
    },
    ClassicWork {
        title: "Anna Karenina",
        author: ClassicAuthor {
            name: "Lev Tolstoy",
            birth_date: Some(date!(1828 - 09 - 09)),
            biography: "Rus yazar. Gerçekçi edebiyatın en önemli temsilcilerinden biri.",
        },
        isbn: "9789750726477",
        publication_date: date!(1877 - 01 - 01),
        description: "Evli bir kadın olan Anna Karenina'nın yasak aşkı ve trajik sonunu anlatan roman.",
        page_count: 864,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000411546-1.jpg"),
    },
    ClassicWork {
        title: "Madame Bovary",
        author: ClassicAuthor {
            name: "Gustave Flaubert",
            birth_date: Some(date!(1821 - 12 - 12)),
            biography: "Fransız yazar. Gerçekçi edebiyatın öncülerinden.",
        },
        isbn: "9789750741449",
        publication_date: date!(1857 - 01 - 01),
        description: "Taşrada yaşayan bir doktorun karısı olan Emma Bovary'nin romantik hayalleri ve aldatmaları üzerine bir roman.",
        page_count: 329,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0001704045001-1.jpg"),
    },
    ClassicWork {
        title: "Don Kişot",
        author: ClassicAuthor {
            name: "Miguel de Cervantes",
            birth_date: Some(date!(1547 - 09 - 29)),
            biography: "İspanyol yazar. Modern romanın kurucusu olarak kabul edilir.",
        },
        isbn: "9789750726019",
        publication_date: date!(1605 - 01 - 01),
        description: "Şövalye romanlarından etkilenerek kendini şövalye sanan bir adamın maceralarını anlatan roman.",
        page_count: 1077,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000105409-1.jpg"),
    },
    ClassicWork {
        title: "Bülbülü Öldürmek",
        author: ClassicAuthor {
            name: "Harper Lee",
            birth_date: Some(date!(1926 - 04 - 28)),
            biography: "Amerikalı yazar. Pulitzer ödüllü tek romanıyla tanınır.",
        },
        isbn: "9789750738746",
        publication_date: date!(1960 - 07 - 11),
        description: "1930'ların Amerika'sında ırkçılık ve adaletsizliği bir çocuğun gözünden anlatan roman.",
        page_count: 360,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0001788075001-1.jpg"),
    },
    ClassicWork {
        title: "Gurur ve Önyargı",
        author: ClassicAuthor {
            name: "Jane Austen",
            birth_date: Some(date!(1775 - 12 - 16)),
            biography: "İngiliz yazar. Romantik dönem edebiyatının önemli isimlerinden.",
        },
        isbn: "9789750726538",
        publication_date: date!(1813 - 01 - 28),
        description: "Elizabeth Bennet ve Bay Darcy arasındaki ilişkiyi konu alan, 19. yüzyıl İngiltere'sinin sosyal yapısını eleştiren roman.",
        page_count: 424,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000105331-1.jpg"),
    },
    ClassicWork {
        title: "Fareler ve İnsanlar",
        author: ClassicAuthor {
            name: "John Steinbeck",
            birth_date: Some(date!(1902 - 02 - 27)),
            biography: "Amerikalı yazar. Nobel Edebiyat Ödülü sahibi.",
        },
        isbn: "9789750726101",
        publication_date: date!(1937 - 01 - 01),
        description: "Büyük Buhran döneminde Kaliforniya'da çalışan iki göçmen tarım işçisinin dostluğunu anlatan novella.",
        page_count: 111,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000064031-1.jpg"),
    },
    ClassicWork {
        title: "Dönüşüm",
        author: ClassicAuthor {
            name: "Franz Kafka",
            birth_date: Some(date!(1883 - 07 - 03)),
            biography: "Çek asıllı Alman yazar. 20. yüzyıl edebiyatının en önemli isimlerinden.",
        },
        isbn: "9789750726132",
        publication_date: date!(1915 - 01 - 01),
        description: "Gregor Samsa'nın bir sabah dev bir böceğe dönüşmesiyle başlayan absürt hikaye.",
        page_count: 74,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0000000064062-1.jpg"),
    },
    ClassicWork {
        title: "Uğultulu Tepeler",
        author: ClassicAuthor {
            name: "Emily Brontë",
            birth_date: Some(date!(1818 - 07 - 30)),
            biography: "İngiliz yazar ve şair. Tek romanıyla edebiyat tarihine geçmiştir.",
        },
        isbn: "9789750738685",
        publication_date: date!(1847 - 12 - 01),
        description: "Catherine Earnshaw ve Heathcliff arasındaki tutkulu ve yıkıcı aşkı anlatan gotik roman.",
        page_count: 376,
        language: "Türkçe",
        publisher: "İş Bankası Kültür Yayınları",
        cover_image_url: Some("https://i.dr.com.tr/cache/600x600-0/originals/0001788074001-1.jpg"),
    },
];
