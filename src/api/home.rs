use crate::api::grid_square::GridSquare;
use crate::core::distance::haversine_km_truncated;
use crate::core::grid::locator_to_point;
use crate::util::coord::{Coordinate, to_radians};
use crate::util::error::LocatorError;
use geo_types::Point;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Reference location that distances are measured from.
///
/// Stored in radians. A fresh `HomeLocation` sits at (0, 0).
///
/// # Example
///
/// ```
/// use maidenhead_rs::HomeLocation;
///
/// let mut home = HomeLocation::default();
/// home.set("JN58TD");
///
/// assert_eq!(home.distance_km("JN57TD"), 111);
/// assert_eq!(home.distance_km("not-a-grid"), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HomeLocation {
    lat_rad: f64,
    lon_rad: f64,
}

impl HomeLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a home at the center of a grid square.
    pub fn from_grid(grid: &str) -> Result<Self, LocatorError> {
        let mut home = Self::default();
        home.try_set(grid)?;
        Ok(home)
    }

    /// Creates a home at an exact WGS84 (lon/lat) coordinate.
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        let (lat_rad, lon_rad) = to_radians(coord);
        Self { lat_rad, lon_rad }
    }

    /// Moves the home to the center of `grid`.
    ///
    /// An invalid locator moves the home to (0, 0). Use [`HomeLocation::try_set`]
    /// to keep the current home instead.
    pub fn set(&mut self, grid: &str) {
        if self.try_set(grid).is_err() {
            debug!("Invalid home locator '{}', resetting home to (0, 0)", grid);
            *self = Self::default();
        }
    }

    /// Moves the home to the center of `grid`, leaving it unchanged on error.
    pub fn try_set(&mut self, grid: &str) -> Result<(), LocatorError> {
        let center = locator_to_point(grid)?;
        *self = Self::from_wgs84(&center);
        debug!("Home set to {} ({}, {})", grid, center.y(), center.x());
        Ok(())
    }

    /// Home position in degrees (x = longitude, y = latitude).
    pub fn home(&self) -> Point<f64> {
        Point::new(self.lon_rad.to_degrees(), self.lat_rad.to_degrees())
    }

    /// Home position as `(lat, lon)` in radians.
    pub fn radians(&self) -> (f64, f64) {
        (self.lat_rad, self.lon_rad)
    }

    /// Whole kilometres from home to the center of `grid`, or 0 for an invalid locator.
    pub fn distance_km(&self, grid: &str) -> u32 {
        self.try_distance_km(grid).unwrap_or_else(|e| {
            debug!("Distance to '{}' unavailable: {}", grid, e);
            0
        })
    }

    /// Whole kilometres from home to the center of `grid`, truncated toward zero.
    pub fn try_distance_km(&self, grid: &str) -> Result<u32, LocatorError> {
        let target = locator_to_point(grid)?;
        Ok(self.distance_to_km(&target))
    }

    /// Whole kilometres from home to the center of a parsed square.
    pub fn distance_to_square_km(&self, square: &GridSquare) -> u32 {
        self.distance_to_km(&square.center())
    }

    /// Whole kilometres from home to an exact WGS84 (lon/lat) coordinate.
    pub fn distance_to_km(&self, coord: &impl Coordinate) -> u32 {
        haversine_km_truncated(self.radians(), to_radians(coord))
    }

    /// Distances for a batch of locators, computed in parallel.
    ///
    /// Invalid locators yield 0, like [`HomeLocation::distance_km`].
    pub fn distances_km<S: AsRef<str> + Sync>(&self, grids: &[S]) -> Vec<u32> {
        grids
            .par_iter()
            .map(|grid| self.distance_km(grid.as_ref()))
            .collect()
    }
}

/// A [`HomeLocation`] behind a single lock, for callers on several threads.
#[derive(Debug, Default)]
pub struct SharedHome {
    inner: Mutex<HomeLocation>,
}

impl SharedHome {
    pub fn new(home: HomeLocation) -> Self {
        Self {
            inner: Mutex::new(home),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HomeLocation> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Home location lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Snapshot of the current home.
    pub fn get(&self) -> HomeLocation {
        *self.lock()
    }

    pub fn set(&self, grid: &str) {
        self.lock().set(grid);
    }

    pub fn try_set(&self, grid: &str) -> Result<(), LocatorError> {
        self.lock().try_set(grid)
    }

    pub fn distance_km(&self, grid: &str) -> u32 {
        self.lock().distance_km(grid)
    }

    pub fn try_distance_km(&self, grid: &str) -> Result<u32, LocatorError> {
        self.lock().try_distance_km(grid)
    }
}
