//! 目录实体与表之间的映射
//!
//! 列映射与具体数据库无关，SQLite 和 PostgreSQL 共用

use chrono::NaiveDateTime;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::catalog::{
    Film, NewFilm, NewPeople, NewPlanet, NewSpecies, NewStarship, NewVehicle, People, Planet,
    Species, Starship, Vehicle,
};
use crate::domain::CatalogEntity;

/// 插入时绑定的列值
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Integer(Option<i64>),
    Timestamp(Option<NaiveDateTime>),
}

/// 按列名读取的查询行
pub trait CatalogRow {
    fn integer(&self, column: &str) -> Result<i64, sqlx::Error>;
    fn string(&self, column: &str) -> Result<String, sqlx::Error>;
    fn text(&self, column: &str) -> Result<Option<String>, sqlx::Error>;
    fn timestamp(&self, column: &str) -> Result<Option<NaiveDateTime>, sqlx::Error>;
}

macro_rules! impl_catalog_row {
    ($row:ty) => {
        impl CatalogRow for $row {
            fn integer(&self, column: &str) -> Result<i64, sqlx::Error> {
                self.try_get(column)
            }

            fn string(&self, column: &str) -> Result<String, sqlx::Error> {
                self.try_get(column)
            }

            fn text(&self, column: &str) -> Result<Option<String>, sqlx::Error> {
                self.try_get(column)
            }

            fn timestamp(&self, column: &str) -> Result<Option<NaiveDateTime>, sqlx::Error> {
                self.try_get(column)
            }
        }
    };
}

impl_catalog_row!(SqliteRow);
impl_catalog_row!(PgRow);

/// 目录实体与表之间的映射
pub trait CatalogTable: CatalogEntity + Sized {
    /// 表名
    const TABLE: &'static str;

    /// 除 id 外的列，顺序与 [`CatalogTable::values`] 一致
    const COLUMNS: &'static [&'static str];

    /// 从查询行解码（行中包含 id 和全部 COLUMNS）
    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error>;

    /// 草稿的列值
    fn values(draft: &Self::Draft) -> Vec<SqlValue>;

    /// `alias.id, alias.col, ...`
    fn select_columns(alias: &str) -> String {
        std::iter::once("id")
            .chain(Self::COLUMNS.iter().copied())
            .map(|c| format!("{}.{}", alias, c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn text(value: &Option<String>) -> SqlValue {
    SqlValue::Text(value.clone())
}

impl CatalogTable for People {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "birth_year",
        "eye_color",
        "gender",
        "hair_color",
        "height",
        "mass",
        "skin_color",
        "homeworld",
        "created",
        "edited",
        "image",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(People {
            id: row.integer("id")?,
            name: row.string("name")?,
            birth_year: row.text("birth_year")?,
            eye_color: row.text("eye_color")?,
            gender: row.text("gender")?,
            hair_color: row.text("hair_color")?,
            height: row.text("height")?,
            mass: row.text("mass")?,
            skin_color: row.text("skin_color")?,
            homeworld: row.text("homeworld")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
            image: row.text("image")?,
        })
    }

    fn values(draft: &NewPeople) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(draft.name.clone())),
            text(&draft.birth_year),
            text(&draft.eye_color),
            text(&draft.gender),
            text(&draft.hair_color),
            text(&draft.height),
            text(&draft.mass),
            text(&draft.skin_color),
            text(&draft.homeworld),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
            text(&draft.image),
        ]
    }
}

impl CatalogTable for Planet {
    const TABLE: &'static str = "planet";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "diameter",
        "rotation_period",
        "orbital_period",
        "gravity",
        "population",
        "climate",
        "terrain",
        "surface_water",
        "created",
        "edited",
        "image",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Planet {
            id: row.integer("id")?,
            name: row.string("name")?,
            diameter: row.text("diameter")?,
            rotation_period: row.text("rotation_period")?,
            orbital_period: row.text("orbital_period")?,
            gravity: row.text("gravity")?,
            population: row.text("population")?,
            climate: row.text("climate")?,
            terrain: row.text("terrain")?,
            surface_water: row.text("surface_water")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
            image: row.text("image")?,
        })
    }

    fn values(draft: &NewPlanet) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(draft.name.clone())),
            text(&draft.diameter),
            text(&draft.rotation_period),
            text(&draft.orbital_period),
            text(&draft.gravity),
            text(&draft.population),
            text(&draft.climate),
            text(&draft.terrain),
            text(&draft.surface_water),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
            text(&draft.image),
        ]
    }
}

impl CatalogTable for Vehicle {
    const TABLE: &'static str = "vehicle";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "model",
        "vehicle_class",
        "manufacturer",
        "length",
        "cost_in_credits",
        "crew",
        "passengers",
        "max_atmosphering_speed",
        "cargo_capacity",
        "consumables",
        "created",
        "edited",
        "image",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Vehicle {
            id: row.integer("id")?,
            name: row.text("name")?,
            model: row.text("model")?,
            vehicle_class: row.text("vehicle_class")?,
            manufacturer: row.text("manufacturer")?,
            length: row.text("length")?,
            cost_in_credits: row.text("cost_in_credits")?,
            crew: row.text("crew")?,
            passengers: row.text("passengers")?,
            max_atmosphering_speed: row.text("max_atmosphering_speed")?,
            cargo_capacity: row.text("cargo_capacity")?,
            consumables: row.text("consumables")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
            image: row.text("image")?,
        })
    }

    fn values(draft: &NewVehicle) -> Vec<SqlValue> {
        vec![
            text(&draft.name),
            text(&draft.model),
            text(&draft.vehicle_class),
            text(&draft.manufacturer),
            text(&draft.length),
            text(&draft.cost_in_credits),
            text(&draft.crew),
            text(&draft.passengers),
            text(&draft.max_atmosphering_speed),
            text(&draft.cargo_capacity),
            text(&draft.consumables),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
            text(&draft.image),
        ]
    }
}

impl CatalogTable for Starship {
    const TABLE: &'static str = "starship";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "model",
        "starship_class",
        "manufacturer",
        "cost_in_credits",
        "length",
        "crew",
        "passengers",
        "max_atmosphering_speed",
        "hyperdrive_rating",
        "mglt",
        "cargo_capacity",
        "consumables",
        "created",
        "edited",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Starship {
            id: row.integer("id")?,
            name: row.string("name")?,
            model: row.text("model")?,
            starship_class: row.text("starship_class")?,
            manufacturer: row.text("manufacturer")?,
            cost_in_credits: row.text("cost_in_credits")?,
            length: row.text("length")?,
            crew: row.text("crew")?,
            passengers: row.text("passengers")?,
            max_atmosphering_speed: row.text("max_atmosphering_speed")?,
            hyperdrive_rating: row.text("hyperdrive_rating")?,
            mglt: row.text("mglt")?,
            cargo_capacity: row.text("cargo_capacity")?,
            consumables: row.text("consumables")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
        })
    }

    fn values(draft: &NewStarship) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(draft.name.clone())),
            text(&draft.model),
            text(&draft.starship_class),
            text(&draft.manufacturer),
            text(&draft.cost_in_credits),
            text(&draft.length),
            text(&draft.crew),
            text(&draft.passengers),
            text(&draft.max_atmosphering_speed),
            text(&draft.hyperdrive_rating),
            text(&draft.mglt),
            text(&draft.cargo_capacity),
            text(&draft.consumables),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
        ]
    }
}

impl CatalogTable for Species {
    const TABLE: &'static str = "species";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "classification",
        "designation",
        "average_height",
        "average_lifespan",
        "eye_colors",
        "hair_colors",
        "skin_colors",
        "language",
        "homeworld",
        "created",
        "edited",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Species {
            id: row.integer("id")?,
            name: row.string("name")?,
            classification: row.text("classification")?,
            designation: row.text("designation")?,
            average_height: row.text("average_height")?,
            average_lifespan: row.text("average_lifespan")?,
            eye_colors: row.text("eye_colors")?,
            hair_colors: row.text("hair_colors")?,
            skin_colors: row.text("skin_colors")?,
            language: row.text("language")?,
            homeworld: row.text("homeworld")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
        })
    }

    fn values(draft: &NewSpecies) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(draft.name.clone())),
            text(&draft.classification),
            text(&draft.designation),
            text(&draft.average_height),
            text(&draft.average_lifespan),
            text(&draft.eye_colors),
            text(&draft.hair_colors),
            text(&draft.skin_colors),
            text(&draft.language),
            text(&draft.homeworld),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
        ]
    }
}

impl CatalogTable for Film {
    const TABLE: &'static str = "film";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "episode_id",
        "opening_crawl",
        "director",
        "producer",
        "release_date",
        "created",
        "edited",
    ];

    fn decode<R: CatalogRow>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Film {
            id: row.integer("id")?,
            title: row.string("title")?,
            episode_id: row.integer("episode_id")?,
            opening_crawl: row.text("opening_crawl")?,
            director: row.text("director")?,
            producer: row.text("producer")?,
            release_date: row.timestamp("release_date")?,
            created: row.timestamp("created")?,
            edited: row.timestamp("edited")?,
        })
    }

    fn values(draft: &NewFilm) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(draft.title.clone())),
            SqlValue::Integer(Some(draft.episode_id)),
            text(&draft.opening_crawl),
            text(&draft.director),
            text(&draft.producer),
            SqlValue::Timestamp(draft.release_date),
            SqlValue::Timestamp(draft.created),
            SqlValue::Timestamp(draft.edited),
        ]
    }
}
