//! Table definitions of the logbook schema.

/// A table and the statement creating it if absent.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub create: &'static str,
}

impl Table {
    pub fn drop_statement(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }
}

/// All tables, ordered such that every table only references tables before it.
pub const TABLES: &[Table] = &[
    Table {
        name: "days",
        create: "
            CREATE TABLE IF NOT EXISTS days (
                id SERIAL PRIMARY KEY,
                date DATE NOT NULL UNIQUE,
                refill DOUBLE PRECISION,
                fuel_start DOUBLE PRECISION NOT NULL,
                fuel_end DOUBLE PRECISION NOT NULL,
                odometer_start INTEGER NOT NULL,
                odometer_end INTEGER NOT NULL
            )
        ",
    },
    Table {
        name: "coordinates",
        create: "
            CREATE TABLE IF NOT EXISTS coordinates (
                id SERIAL PRIMARY KEY,
                lat DOUBLE PRECISION NOT NULL,
                lon DOUBLE PRECISION NOT NULL,
                CONSTRAINT unique_coordinates UNIQUE (lat, lon)
            )
        ",
    },
    Table {
        name: "locations",
        create: "
            CREATE TABLE IF NOT EXISTS locations (
                id SERIAL PRIMARY KEY,
                name TEXT,
                additional_name TEXT,
                comment_name TEXT,
                street TEXT NOT NULL,
                housenum TEXT NOT NULL,
                additional_address TEXT,
                comment_address TEXT,
                country TEXT NOT NULL,
                country_a TEXT NOT NULL,
                region TEXT NOT NULL,
                region_a TEXT NOT NULL,
                county TEXT,
                locality TEXT,
                wof_country INTEGER NOT NULL,
                wof_region INTEGER NOT NULL,
                wof_county INTEGER,
                wof_locality INTEGER,
                coords_id INTEGER REFERENCES coordinates(id)
            )
        ",
    },
    Table {
        name: "tasks",
        create: "
            CREATE TABLE IF NOT EXISTS tasks (
                id SERIAL PRIMARY KEY,
                day_id INTEGER NOT NULL REFERENCES days(id) ON DELETE CASCADE,
                count INTEGER,
                name TEXT NOT NULL,
                loc_id INTEGER NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
                department TEXT NOT NULL,
                responsible TEXT NOT NULL,
                note TEXT
            )
        ",
    },
    Table {
        name: "distances",
        create: "
            CREATE TABLE IF NOT EXISTS distances (
                id SERIAL PRIMARY KEY,
                loc_from INTEGER NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
                loc_to INTEGER NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
                distance INTEGER NOT NULL
            )
        ",
    },
];
