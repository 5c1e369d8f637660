//! Catalog Context - Entities
//!
//! 每个实体对应一张表；关系字段不参与默认序列化

use chrono::NaiveDateTime;
use serde::Serialize;

use super::errors::ValidationErrors;
use super::payload::{Payload, PayloadReader};
use super::timestamp::http_date;
use super::{CatalogEntity, EntityDraft, EntityId};

// ============================================================================
// People
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct People {
    pub id: EntityId,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub homeworld: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
    #[serde(skip)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPeople {
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub homeworld: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
    pub image: Option<String>,
}

impl EntityDraft for NewPeople {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewPeople {
            name: r.required_text("name").unwrap_or_default(),
            birth_year: r.text("birth_year"),
            eye_color: r.text("eye_color"),
            gender: r.text("gender"),
            hair_color: r.text("hair_color"),
            height: r.text("height"),
            mass: r.text("mass"),
            skin_color: r.text("skin_color"),
            homeworld: r.text("homeworld"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
            image: r.text("image"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for People {
    const RESOURCE: &'static str = "People";
    type Draft = NewPeople;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Planet
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    pub id: EntityId,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
    #[serde(skip)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
    pub image: Option<String>,
}

impl EntityDraft for NewPlanet {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewPlanet {
            name: r.required_text("name").unwrap_or_default(),
            diameter: r.text("diameter"),
            rotation_period: r.text("rotation_period"),
            orbital_period: r.text("orbital_period"),
            gravity: r.text("gravity"),
            population: r.text("population"),
            climate: r.text("climate"),
            terrain: r.text("terrain"),
            surface_water: r.text("surface_water"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
            image: r.text("image"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for Planet {
    const RESOURCE: &'static str = "Planet";
    type Draft = NewPlanet;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Vehicle
// ============================================================================

/// 载具；`name` 可为空，创建时不做必填校验
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: EntityId,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
    #[serde(skip)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVehicle {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
    pub image: Option<String>,
}

impl EntityDraft for NewVehicle {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewVehicle {
            name: r.text("name"),
            model: r.text("model"),
            vehicle_class: r.text("vehicle_class"),
            manufacturer: r.text("manufacturer"),
            length: r.text("length"),
            cost_in_credits: r.text("cost_in_credits"),
            crew: r.text("crew"),
            passengers: r.text("passengers"),
            max_atmosphering_speed: r.text("max_atmosphering_speed"),
            cargo_capacity: r.text("cargo_capacity"),
            consumables: r.text("consumables"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
            image: r.text("image"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for Vehicle {
    const RESOURCE: &'static str = "Vehicle";
    type Draft = NewVehicle;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Starship
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Starship {
    pub id: EntityId,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStarship {
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    pub mglt: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
}

impl EntityDraft for NewStarship {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewStarship {
            name: r.required_text("name").unwrap_or_default(),
            model: r.text("model"),
            starship_class: r.text("starship_class"),
            manufacturer: r.text("manufacturer"),
            cost_in_credits: r.text("cost_in_credits"),
            length: r.text("length"),
            crew: r.text("crew"),
            passengers: r.text("passengers"),
            max_atmosphering_speed: r.text("max_atmosphering_speed"),
            hyperdrive_rating: r.text("hyperdrive_rating"),
            mglt: r.text("MGLT"),
            cargo_capacity: r.text("cargo_capacity"),
            consumables: r.text("consumables"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for Starship {
    const RESOURCE: &'static str = "Starship";
    type Draft = NewStarship;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Species
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Species {
    pub id: EntityId,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub average_lifespan: Option<String>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSpecies {
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub average_lifespan: Option<String>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
}

impl EntityDraft for NewSpecies {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewSpecies {
            name: r.required_text("name").unwrap_or_default(),
            classification: r.text("classification"),
            designation: r.text("designation"),
            average_height: r.text("average_height"),
            average_lifespan: r.text("average_lifespan"),
            eye_colors: r.text("eye_colors"),
            hair_colors: r.text("hair_colors"),
            skin_colors: r.text("skin_colors"),
            language: r.text("language"),
            homeworld: r.text("homeworld"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for Species {
    const RESOURCE: &'static str = "Species";
    type Draft = NewSpecies;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Film
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Film {
    pub id: EntityId,
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    #[serde(serialize_with = "http_date::serialize")]
    pub release_date: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "http_date::serialize")]
    pub edited: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub created: Option<NaiveDateTime>,
    pub edited: Option<NaiveDateTime>,
}

impl EntityDraft for NewFilm {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors> {
        let mut r = PayloadReader::new(data);
        let draft = NewFilm {
            title: r.required_text("title").unwrap_or_default(),
            episode_id: r.required_integer("episode_id").unwrap_or_default(),
            opening_crawl: r.text("opening_crawl"),
            director: r.text("director"),
            producer: r.text("producer"),
            release_date: r.timestamp("release_date"),
            created: r.timestamp("created"),
            edited: r.timestamp("edited"),
        };
        r.finish()?;
        Ok(draft)
    }
}

impl CatalogEntity for Film {
    const RESOURCE: &'static str = "Film";
    type Draft = NewFilm;

    fn id(&self) -> EntityId {
        self.id
    }
}
