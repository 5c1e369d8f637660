//! 多对多关系
//!
//! 每个关系对应一张连接表，(left, right) 组合唯一

use crate::domain::user::FavoriteKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// 用户收藏的星球
    UserFavoritePlanets,
    /// 用户收藏的人物
    UserFavoritePeople,
    PeopleFilms,
    SpeciesPeople,
    PeopleStarships,
    PeopleVehicles,
    /// 星球居民
    PlanetsPeople,
    SpeciesFilms,
    StarshipsFilms,
    VehiclesFilms,
    PlanetsFilms,
}

impl Relation {
    pub const ALL: [Relation; 11] = [
        Relation::UserFavoritePlanets,
        Relation::UserFavoritePeople,
        Relation::PeopleFilms,
        Relation::SpeciesPeople,
        Relation::PeopleStarships,
        Relation::PeopleVehicles,
        Relation::PlanetsPeople,
        Relation::SpeciesFilms,
        Relation::StarshipsFilms,
        Relation::VehiclesFilms,
        Relation::PlanetsFilms,
    ];

    /// 连接表名
    pub fn table(&self) -> &'static str {
        match self {
            Relation::UserFavoritePlanets => "user_favorites_planets",
            Relation::UserFavoritePeople => "user_favorites_people",
            Relation::PeopleFilms => "people_films",
            Relation::SpeciesPeople => "species_people",
            Relation::PeopleStarships => "people_starships",
            Relation::PeopleVehicles => "people_vehicles",
            Relation::PlanetsPeople => "planets_people",
            Relation::SpeciesFilms => "species_films",
            Relation::StarshipsFilms => "starships_films",
            Relation::VehiclesFilms => "vehicles_films",
            Relation::PlanetsFilms => "planets_films",
        }
    }

    /// 左侧（表名, 外键列）
    pub fn left(&self) -> (&'static str, &'static str) {
        match self {
            Relation::UserFavoritePlanets | Relation::UserFavoritePeople => ("user", "user_id"),
            Relation::PeopleFilms | Relation::PeopleStarships | Relation::PeopleVehicles => {
                ("people", "people_id")
            }
            Relation::SpeciesPeople | Relation::SpeciesFilms => ("species", "species_id"),
            Relation::PlanetsPeople | Relation::PlanetsFilms => ("planet", "planet_id"),
            Relation::StarshipsFilms => ("starship", "starship_id"),
            Relation::VehiclesFilms => ("vehicle", "vehicle_id"),
        }
    }

    /// 右侧（表名, 外键列）
    pub fn right(&self) -> (&'static str, &'static str) {
        match self {
            Relation::UserFavoritePlanets => ("planet", "planet_id"),
            Relation::UserFavoritePeople | Relation::SpeciesPeople | Relation::PlanetsPeople => {
                ("people", "people_id")
            }
            Relation::PeopleFilms
            | Relation::SpeciesFilms
            | Relation::StarshipsFilms
            | Relation::VehiclesFilms
            | Relation::PlanetsFilms => ("film", "film_id"),
            Relation::PeopleStarships => ("starship", "starship_id"),
            Relation::PeopleVehicles => ("vehicle", "vehicle_id"),
        }
    }

    /// 收藏类型对应的关系
    pub fn favorites(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Planet => Relation::UserFavoritePlanets,
            FavoriteKind::People => Relation::UserFavoritePeople,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_distinct() {
        let tables: HashSet<&str> = Relation::ALL.iter().map(|r| r.table()).collect();
        assert_eq!(tables.len(), Relation::ALL.len());
    }

    #[test]
    fn test_favorites_mapping() {
        assert_eq!(
            Relation::favorites(FavoriteKind::Planet).right(),
            ("planet", "planet_id")
        );
        assert_eq!(
            Relation::favorites(FavoriteKind::People).left(),
            ("user", "user_id")
        );
    }

    #[test]
    fn test_columns_differ_on_each_side() {
        for relation in Relation::ALL {
            assert_ne!(relation.left().1, relation.right().1, "{}", relation);
        }
    }
}
