use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::markdown::{self, Block};

const FI_MONTHS: [&str; 12] = [
    "tammikuuta",
    "helmikuuta",
    "maaliskuuta",
    "huhtikuuta",
    "toukokuuta",
    "kesäkuuta",
    "heinäkuuta",
    "elokuuta",
    "syyskuuta",
    "lokakuuta",
    "marraskuuta",
    "joulukuuta",
];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub content: &'static str,
}

impl BlogPost {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    pub fn formatted_date(&self) -> String {
        format_date_fi(self.date)
    }

    pub fn blocks(&self) -> Vec<Block> {
        markdown::parse(self.content)
    }
}

/// `2026-02-15` becomes `15. helmikuuta 2026`. Unparseable input is returned
/// as is.
pub fn format_date_fi(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}. {} {}",
            date.day(),
            FI_MONTHS[date.month0() as usize],
            date.year()
        ),
        Err(e) => {
            log::warn!("Unparseable post date {}: {}", iso_date, e);
            iso_date.to_string()
        }
    }
}

static POSTS: Lazy<HashMap<&'static str, BlogPost>> = Lazy::new(|| {
    let posts = [
        BlogPost {
            slug: "top-5-tapaa-saada-kasinon-klipit-tiktokiin-2026",
            title: "Top 5 tapaa saada kasinon klipit TikTokiin ilman shadowbannia 2026",
            excerpt: "TikTokin algoritmi on muuttunut merkittävästi vuoden 2026 alussa. Tässä artikkelissa jaamme viisi todistettua strategiaa, joilla kasinon sisältö menee läpi ilman shadowbannia.",
            date: "2026-02-15",
            read_time: "5 min",
            category: "Sosiaalinen media",
            content: TIKTOK_CONTENT,
        },
        BlogPost {
            slug: "miten-luoda-engaging-podcast-sisaltoa-igaming-alalle",
            title: "Miten luoda engaging podcast-sisältöä iGaming-alalle",
            excerpt: "Podcastit ovat nousseet yhdeksi tehokkaimmista tavoista rakentaa brändiä iGaming-alalla. Tässä oppaassa käymme läpi, miten luot sisältöä joka resonoi yleisön kanssa.",
            date: "2026-02-10",
            read_time: "8 min",
            category: "Podcast",
            content: PODCAST_CONTENT,
        },
        BlogPost {
            slug: "rahapelilain-avautuminen-2027-mitä-se-tarkoittaa-sisältötuottajille",
            title: "Rahapelilain avautuminen 2027 – mitä se tarkoittaa sisältötuottajille",
            excerpt: "Suomen rahapelilaki aukeaa heinäkuussa 2027. Tämä muutos tuo merkittäviä mahdollisuuksia sisältötuottajille ja markkinoijille. Käymme läpi tärkeimmät muutokset.",
            date: "2026-02-05",
            read_time: "6 min",
            category: "Lainsäädäntö",
            content: LAW_CONTENT,
        },
    ];
    posts.into_iter().map(|post| (post.slug, post)).collect()
});

/// Every post, newest first.
pub fn all_posts() -> Vec<&'static BlogPost> {
    let mut posts: Vec<&'static BlogPost> = POSTS.values().collect();
    posts.sort_by(|a, b| b.date.cmp(a.date).then_with(|| a.slug.cmp(b.slug)));
    posts
}

/// Looks a post up by slug. Percent-encoded slugs from the address bar are
/// decoded first.
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    if let Some(post) = POSTS.get(slug) {
        return Some(post);
    }
    let decoded = urlencoding::decode(slug).ok()?;
    POSTS.get(decoded.as_ref())
}

const TIKTOK_CONTENT: &str = r#"
TikTokin algoritmi on muuttunut merkittävästi vuoden 2026 alussa, ja kasinon sisällön tuottajat ovat joutuneet sopeutumaan uusiin sääntöihin. Tässä artikkelissa jaamme viisi todistettua strategiaa, joilla kasinon sisältö menee läpi ilman shadowbannia.

## 1. Käytä oikeita avainsanoja

Vältä suoria viittauksia uhkapelaamiseen otsikossa ja ensimmäisissä sekunneissa. Sen sijaan keskity:
- Strategiaan ja taktiikoihin
- Viihteeseen ja elämyksiin
- Yhteisöön ja kulttuuriin

## 2. Rakenna sisältö arvon ympärille

TikTokin algoritmi suosii sisältöä, joka tarjoaa arvoa katsojalle. Kasinosisällössä tämä tarkoittaa:
- Opetussisältöä (miten pelit toimivat)
- Viihdyttäviä tarinoita
- Yhteisön rakentamista

## 3. Käytä luovia kiertoteitä

Älä näytä suoraan rahapelaamista ensimmäisissä sekunneissa. Sen sijaan:
- Aloita kysymyksellä tai väitteellä
- Käytä B-roll-materiaalia
- Rakenna narratiivi

## 4. Hyödynnä TikTokin natiiveja ominaisuuksia

TikTok suosii sisältöä, joka käyttää sen omia työkaluja:
- Duetit ja stitchit
- TikTokin omat efektit
- Trendit ja haasteet

## 5. Testaa ja analysoi jatkuvasti

Mikään strategia ei ole ikuinen. Seuraa:
- Katseluaikaa (watch time)
- Jakamisia ja tallennuksia
- Kommenttien laatua

## Yhteenveto

Shadowbannin välttäminen TikTokissa vaatii strategista lähestymistapaa ja jatkuvaa oppimista. Keskity arvon tuottamiseen, käytä luovia kiertoteitä ja testaa jatkuvasti uusia lähestymistapoja.

**Tarvitsetko apua TikTok-strategiasi kanssa?** [Ota yhteyttä](/contact) ja keskustellaan, miten voimme auttaa.
"#;

const PODCAST_CONTENT: &str = r#"
Podcastit ovat nousseet yhdeksi tehokkaimmista tavoista rakentaa brändiä iGaming-alalla. Tässä oppaassa käymme läpi, miten luot sisältöä joka resonoi yleisön kanssa ja rakentaa pitkäaikaista sitoutumista.

## Miksi podcastit toimivat iGaming-alalla?

iGaming-ala on täynnä tarinoita, strategioita ja mielenkiintoisia persoonia. Podcastit tarjoavat täydellisen alustan:
- Syvällisille keskusteluille
- Asiantuntijahaastatteluille
- Yhteisön rakentamiselle

## 1. Määrittele kohdeyleisösi

Ennen kuin aloitat, kysy itseltäsi:
- Kenelle teet podcastia?
- Mitä ongelmia ratkaiset?
- Mikä tekee sisällöstäsi ainutlaatuista?

## 2. Valitse oikea formaatti

iGaming-podcasteille toimii useita formaatteja:
- **Haastattelut**: Keskustelut alan vaikuttajien kanssa
- **Soolo-episodit**: Omat näkemyksesi ja analyysisi
- **Paneeli**: Usean asiantuntijan keskustelu
- **Tarinat**: Mielenkiintoiset tarinat alan tapahtumista

## 3. Tuotannon laatu

Hyvä äänenlaatu on kriittistä. Minimissään tarvitset:
- Kunnollisen mikrofonin
- Ääneneristyksen
- Editointiohjelman

## 4. Sisällön rakenne

Jokaisen episodin tulisi noudattaa selkeää rakennetta:
1. **Intro** (30-60 sek): Kerro mitä episodissa käsitellään
2. **Pääsisältö** (20-40 min): Varsinainen keskustelu
3. **Outro** (30-60 sek): Yhteenveto ja CTA

## 5. Jakelu ja markkinointi

Pelkkä podcastin julkaisu ei riitä. Tarvitset:
- Lyhyet klipit sosiaaliseen mediaan
- Transkriptiot SEO:ta varten
- Yhteistyötä muiden podcastien kanssa

## Yhteenveto

Menestyvä iGaming-podcast vaatii selkeän strategian, laadukasta tuotantoa ja johdonmukaista julkaisua. Keskity arvon tuottamiseen ja yhteisön rakentamiseen.

**Haluatko aloittaa oman podcastin?** [Ota yhteyttä](/contact) ja keskustellaan, miten voimme auttaa.
"#;

const LAW_CONTENT: &str = r#"
Suomen rahapelilaki aukeaa heinäkuussa 2027, ja tämä muutos tuo merkittäviä mahdollisuuksia sisältötuottajille ja markkinoijille. Käymme läpi tärkeimmät muutokset ja mitä ne tarkoittavat käytännössä.

## Mitä muuttuu?

Vuoden 2027 alusta lähtien:
- Ulkomaiset kasinot voivat hakea toimilupaa Suomessa
- Markkinointi vapautuu kontrolloidusti
- Sisällöntuotannolle tulee uusia mahdollisuuksia

## Mahdollisuudet sisältötuottajille

### 1. Kasvanut kysyntä

Uudet toimijat tarvitsevat:
- Brändin rakentamista
- Sisältömarkkinointia
- Yhteisön luomista

### 2. Monipuolisemmat yhteistyöt

Vapautuva markkina mahdollistaa:
- Affiliate-markkinoinnin
- Sponsoroidun sisällön
- Brändiyhteistyöt

### 3. Uudet alustat ja formaatit

Markkinoinnin vapautuminen avaa ovia:
- Podcasteille
- YouTube-sisällölle
- Sosiaalisen median kampanjoille

## Vastuullisuus on avainasemassa

Vaikka markkinat vapautuvat, vastuullisuus pysyy keskiössä:
- **Ikärajat**: Kaikki sisältö on 18+
- **Responsible gaming**: Vastuullisen pelaamisen viestit
- **Läpinäkyvyys**: Selkeät merkinnät yhteistyöstä

## Miten valmistautua?

### 1. Rakenna brändiä jo nyt

Älä odota heinäkuuta 2027:
- Luo sisältöä jo nyt
- Rakenna yleisöä
- Kehitä asiantuntijuutta

### 2. Verkostoidu

Ota yhteyttä:
- Tuleviin toimijoihin
- Muihin sisältötuottajiin
- Alan vaikuttajiin

### 3. Ymmärrä säännökset

Tutustu:
- Uuteen lainsäädäntöön
- Markkinoinnin rajoituksiin
- Vastuullisen pelaamisen periaatteisiin

## Yhteenveto

Rahapelilain avautuminen on historiallinen hetki Suomen iGaming-alalle. Sisältötuottajille se tarjoaa valtavasti uusia mahdollisuuksia, mutta myös vastuuta. Nyt on oikea aika valmistautua.

**Haluatko olla mukana muutoksessa?** [Ota yhteyttä](/contact) ja keskustellaan, miten voimme auttaa.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_sorted_newest_first() {
        let posts = all_posts();
        assert_eq!(posts.len(), 3);
        let dates: Vec<&str> = posts.iter().map(|post| post.date).collect();
        assert_eq!(dates, vec!["2026-02-15", "2026-02-10", "2026-02-05"]);
        assert!(posts.iter().all(|post| post.published().is_some()));
    }

    #[test]
    fn test_find_post_by_slug() {
        let post = find_post("miten-luoda-engaging-podcast-sisaltoa-igaming-alalle").unwrap();
        assert_eq!(post.category, "Podcast");
        assert_eq!(post.read_time, "8 min");
        assert!(find_post("ei-olemassa").is_none());
        assert!(find_post("").is_none());
    }

    #[test]
    fn test_find_post_decodes_slug() {
        let encoded = "rahapelilain-avautuminen-2027-mit%C3%A4-se-tarkoittaa-sis%C3%A4lt%C3%B6tuottajille";
        let post = find_post(encoded).unwrap();
        assert_eq!(post.date, "2026-02-05");
    }

    #[test]
    fn test_format_date_fi() {
        assert_eq!(format_date_fi("2026-02-15"), "15. helmikuuta 2026");
        assert_eq!(format_date_fi("2027-07-01"), "1. heinäkuuta 2027");
        assert_eq!(format_date_fi("2026-12-31"), "31. joulukuuta 2026");
        assert_eq!(format_date_fi("huomenna"), "huomenna");
    }

    #[test]
    fn test_post_bodies_render_to_blocks() {
        for post in all_posts() {
            let blocks = post.blocks();
            assert!(matches!(blocks.first(), Some(Block::Paragraph(_))), "{}", post.slug);
            assert!(blocks.iter().any(|block| matches!(block, Block::Heading { level: 2, .. })));
            assert!(blocks.iter().any(|block| matches!(block, Block::List(_))));
        }
    }
}
