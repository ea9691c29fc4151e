//! National calendar of Spain.
//!
//! The Spanish and Latin calendars share this overlay; they differ only in the
//! titles attached to the celebrations the overlay introduces or renames.

use std::borrow::Cow;

use crate::celebration::{Anchor, Color, Rank, fixed, relative};
use crate::engine::{Overlay, Patch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Language {
    Spanish,
    Latin,
}

impl Language {
    fn pick(self, es: &'static str, la: &'static str) -> &'static str {
        match self {
            Language::Spanish => es,
            Language::Latin => la,
        }
    }
}

pub(crate) fn overlays(language: Language) -> Vec<Overlay> {
    let t = |es, la| Cow::Borrowed(language.pick(es, la));

    let mut overlays = vec![
        // National memorials.
        Overlay::patch(
            "vincent_of_saragossa_deacon",
            Patch::new()
                .rank(Rank::ObligatoryMemorial)
                .title(t("San Vicente, diácono y mártir", "S. Vincentii, diaconi et martyris")),
        ),
        Overlay::Insert(celebration! {
            id: "ildephonsus_of_toledo_bishop",
            date: fixed(1, 23),
            rank: OptionalMemorial,
            precedence: OptionalMemorial,
            colors: [White],
            origin: Local,
            title: language.pick("San Ildefonso, obispo", "S. Ildephonsi, episcopi"),
        }),
        Overlay::patch(
            "isidore_of_seville_bishop",
            Patch::new().rank(Rank::ObligatoryMemorial).title(t(
                "San Isidoro, obispo y doctor de la Iglesia",
                "S. Isidori, episcopi et Ecclesiae doctoris",
            )),
        ),
        Overlay::Insert(celebration! {
            id: "isidore_the_farmer",
            date: fixed(5, 15),
            rank: OptionalMemorial,
            precedence: OptionalMemorial,
            colors: [White],
            origin: Local,
            title: language.pick("San Isidro, labrador", "S. Isidori, agricolae"),
        }),
        Overlay::Insert(celebration! {
            id: "ferdinand_iii_of_castile",
            date: fixed(5, 30),
            rank: OptionalMemorial,
            precedence: OptionalMemorial,
            colors: [White],
            origin: Local,
            title: language.pick("San Fernando", "S. Ferdinandi"),
        }),
        // Promotions.
        Overlay::patch(
            "john_of_avila_priest",
            Patch::new().rank(Rank::Feast).title(t(
                "San Juan de Ávila, presbítero y doctor de la Iglesia",
                "S. Ioannis de Avila, presbyteri et Ecclesiae doctoris",
            )),
        ),
        Overlay::patch(
            "teresa_of_jesus_of_avila_virgin",
            Patch::new().rank(Rank::Feast).title(t(
                "Santa Teresa de Jesús, virgen y doctora de la Iglesia",
                "S. Teresiae a Iesu, virginis et Ecclesiae doctoris",
            )),
        ),
        Overlay::patch(
            "james_apostle",
            Patch::new()
                .rank(Rank::Solemnity)
                .obligation(true)
                .title(t("Santiago, apóstol, patrono de España", "S. Iacobi, apostoli, Hispaniae patroni")),
        ),
        // Local feasts.
        Overlay::Insert(celebration! {
            id: "our_lady_of_the_pillar",
            date: fixed(10, 12),
            rank: Feast,
            precedence: ProperFeast,
            colors: [White],
            origin: Local,
            title: language.pick("Nuestra Señora del Pilar", "B. Mariae Virginis de Pilari"),
        }),
        Overlay::Insert(celebration! {
            id: "our_lord_jesus_christ_the_eternal_high_priest",
            date: relative(Anchor::Pentecost, 4),
            rank: Feast,
            precedence: ProperFeast,
            colors: [White],
            origin: Local,
            title: language.pick("Jesucristo, Sumo y Eterno Sacerdote", "D. N. Iesu Christi Summi et Aeterni Sacerdotis"),
        }),
        // Privileges and obligations.
        Overlay::patch(
            "immaculate_conception_of_the_blessed_virgin_mary",
            Patch::new().colors(vec![Color::Blue, Color::White]),
        ),
        Overlay::patch("peter_and_paul_apostles", Patch::new().obligation(false)),
    ];

    overlays.extend(patrons_of_europe(language));
    overlays
}

/// Co-patrons of Europe are celebrated as feasts throughout the continent.
fn patrons_of_europe(language: Language) -> Vec<Overlay> {
    let patrons: [(&'static str, &'static str, &'static str); 5] = [
        (
            "cyril_the_philosopher_monk_and_methodius_of_thessaloniki_bishop",
            "Santos Cirilo, monje, y Metodio, obispo, patronos de Europa",
            "Ss. Cyrilli, monachi, et Methodii, episcopi, Europae patronorum",
        ),
        (
            "catherine_of_siena_virgin",
            "Santa Catalina de Siena, virgen y doctora de la Iglesia, patrona de Europa",
            "S. Catharinae Senensis, virginis et Ecclesiae doctoris, Europae patronae",
        ),
        ("benedict_of_nursia_abbot", "San Benito, abad, patrono de Europa", "S. Benedicti, abbatis, Europae patroni"),
        (
            "bridget_of_sweden_religious",
            "Santa Brígida, religiosa, patrona de Europa",
            "S. Birgittae, religiosae, Europae patronae",
        ),
        (
            "teresa_benedicta_of_the_cross_edith_stein_virgin",
            "Santa Teresa Benedicta de la Cruz, virgen y mártir, patrona de Europa",
            "S. Teresiae Benedictae a Cruce, virginis et martyris, Europae patronae",
        ),
    ];

    patrons
        .into_iter()
        .map(|(id, es, la)| Overlay::patch(id, Patch::new().rank(Rank::Feast).title(language.pick(es, la))))
        .collect()
}
