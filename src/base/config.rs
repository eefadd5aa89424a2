use super::{GravityDensity, AIR, MAX_NCOMPONENT, MAX_NDIM, MAX_NPHASE, WATER};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration shared by all flux reconstructions of a model
///
/// The default configuration corresponds to the two-phase two-component (water-air)
/// model in 2D: the minor component of the liquid phase is air and the minor
/// component of the gas phase is water.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Space dimension
    pub ndim: usize,

    /// Number of fluid phases
    pub nphase: usize,

    /// Number of chemical components
    pub ncomponent: usize,

    /// Component whose concentration gradient is reconstructed in each phase
    pub minor_component: [usize; MAX_NPHASE],

    /// Enables the buoyancy correction of the potential gradient
    pub enable_gravity: bool,

    /// Density used in the buoyancy term of interior faces
    pub gravity_density: GravityDensity,
}

impl Config {
    /// Allocates a new instance (two-phase two-component in 2D)
    pub fn new() -> Self {
        Config {
            ndim: 2,
            nphase: 2,
            ncomponent: 2,
            minor_component: [AIR, WATER, WATER],
            enable_gravity: false,
            gravity_density: GravityDensity::Interpolated,
        }
    }

    /// Sets the space dimension
    pub fn set_ndim(&mut self, ndim: usize) -> Result<&mut Self, StrError> {
        if ndim < 1 || ndim > MAX_NDIM {
            return Err("ndim must be 1, 2, or 3");
        }
        self.ndim = ndim;
        Ok(self)
    }

    /// Sets the number of fluid phases
    pub fn set_nphase(&mut self, nphase: usize) -> Result<&mut Self, StrError> {
        if nphase < 1 || nphase > MAX_NPHASE {
            return Err("nphase must be in [1, MAX_NPHASE]");
        }
        if self.minor_component.iter().take(nphase).any(|c| *c >= self.ncomponent) {
            return Err("the minor component of a phase must be smaller than ncomponent");
        }
        self.nphase = nphase;
        Ok(self)
    }

    /// Sets the number of chemical components
    ///
    /// The minor components of all phases must be smaller than `ncomponent`;
    /// thus, call [Config::set_minor_component] first when reducing the number of components.
    pub fn set_ncomponent(&mut self, ncomponent: usize) -> Result<&mut Self, StrError> {
        if ncomponent < 1 || ncomponent > MAX_NCOMPONENT {
            return Err("ncomponent must be in [1, MAX_NCOMPONENT]");
        }
        if self.minor_component.iter().take(self.nphase).any(|c| *c >= ncomponent) {
            return Err("the minor component of a phase must be smaller than ncomponent");
        }
        self.ncomponent = ncomponent;
        Ok(self)
    }

    /// Sets the component whose concentration gradient is computed in a phase
    pub fn set_minor_component(&mut self, phase: usize, component: usize) -> Result<&mut Self, StrError> {
        if phase >= self.nphase {
            return Err("phase index is out of range");
        }
        if component >= self.ncomponent {
            return Err("component index is out of range");
        }
        self.minor_component[phase] = component;
        Ok(self)
    }

    /// Enables or disables the buoyancy correction
    pub fn set_enable_gravity(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.enable_gravity = flag;
        Ok(self)
    }

    /// Sets the density used in the buoyancy term of interior faces
    pub fn set_gravity_density(&mut self, option: GravityDensity) -> Result<&mut Self, StrError> {
        self.gravity_density = option;
        Ok(self)
    }

    /// Returns the minor component of a phase
    #[inline]
    pub fn minor(&self, phase: usize) -> usize {
        self.minor_component[phase]
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.ndim < 1 || self.ndim > MAX_NDIM {
            return Some(format!("ndim = {:?} is incorrect; it must be 1, 2, or 3", self.ndim));
        }
        if self.nphase < 1 || self.nphase > MAX_NPHASE {
            return Some(format!(
                "nphase = {:?} is incorrect; it must be 1 ≤ nphase ≤ {}",
                self.nphase, MAX_NPHASE
            ));
        }
        if self.ncomponent < 1 || self.ncomponent > MAX_NCOMPONENT {
            return Some(format!(
                "ncomponent = {:?} is incorrect; it must be 1 ≤ ncomponent ≤ {}",
                self.ncomponent, MAX_NCOMPONENT
            ));
        }
        for phase in 0..self.nphase {
            if self.minor_component[phase] >= self.ncomponent {
                return Some(format!(
                    "minor_component[{}] = {:?} is incorrect; it must be < ncomponent = {}",
                    phase, self.minor_component[phase], self.ncomponent
                ));
            }
        }
        None // all good
    }

    /// Parses a configuration from a JSON string and validates it
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        let config: Config = serde_json::from_str(json).map_err(|_| "cannot parse JSON configuration")?;
        if config.validate().is_some() {
            return Err("JSON configuration is inconsistent");
        }
        Ok(config)
    }

    /// Reads a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        if config.validate().is_some() {
            return Err("JSON configuration is inconsistent");
        }
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "ndim = {:?}\n", self.ndim)?;
        write!(f, "nphase = {:?}\n", self.nphase)?;
        write!(f, "ncomponent = {:?}\n", self.ncomponent)?;
        write!(f, "minor_component = {:?}\n", &self.minor_component[..usize::min(self.nphase, MAX_NPHASE)])?;
        write!(f, "enable_gravity = {:?}\n", self.enable_gravity)?;
        write!(f, "gravity_density = {:?}\n", self.gravity_density)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::{GravityDensity, AIR, WATER};
    use crate::StrError;

    #[test]
    fn new_works() -> Result<(), StrError> {
        let mut config = Config::new();
        assert_eq!(config.minor(0), AIR);
        assert_eq!(config.minor(1), WATER);
        assert_eq!(config.validate(), None);

        config
            .set_ndim(3)?
            .set_enable_gravity(true)?
            .set_gravity_density(GravityDensity::SaturationWeighted)?;

        assert_eq!(
            format!("{}", config),
            "Configuration data\n\
             ==================\n\
             ndim = 3\n\
             nphase = 2\n\
             ncomponent = 2\n\
             minor_component = [1, 0]\n\
             enable_gravity = true\n\
             gravity_density = SaturationWeighted\n"
        );
        Ok(())
    }

    #[test]
    fn three_phases_works() -> Result<(), StrError> {
        let mut config = Config::new();
        config
            .set_nphase(3)?
            .set_ncomponent(3)?
            .set_minor_component(2, 2)?
            .set_minor_component(0, 2)?;
        assert_eq!(config.minor_component, [2, WATER, 2]);
        assert_eq!(config.validate(), None);
        Ok(())
    }

    #[test]
    fn single_component_works() -> Result<(), StrError> {
        let mut config = Config::new();
        config
            .set_minor_component(0, WATER)?
            .set_minor_component(1, WATER)?
            .set_ncomponent(1)?;
        assert_eq!(config.ncomponent, 1);
        assert_eq!(config.validate(), None);

        // a stale minor component cannot be activated by adding a phase
        config.minor_component[2] = AIR;
        assert_eq!(
            config.set_nphase(3).err(),
            Some("the minor component of a phase must be smaller than ncomponent")
        );
        config.minor_component[2] = WATER;
        config.set_nphase(3)?;
        assert_eq!(config.validate(), None);
        Ok(())
    }

    #[test]
    fn catch_some_errors() -> Result<(), StrError> {
        let mut config = Config::new();
        assert_eq!(config.set_ndim(0).err(), Some("ndim must be 1, 2, or 3"));
        assert_eq!(config.set_ndim(4).err(), Some("ndim must be 1, 2, or 3"));
        assert_eq!(config.set_nphase(0).err(), Some("nphase must be in [1, MAX_NPHASE]"));
        assert_eq!(config.set_nphase(4).err(), Some("nphase must be in [1, MAX_NPHASE]"));
        assert_eq!(
            config.set_ncomponent(5).err(),
            Some("ncomponent must be in [1, MAX_NCOMPONENT]")
        );
        assert_eq!(
            config.set_ncomponent(1).err(),
            Some("the minor component of a phase must be smaller than ncomponent")
        );
        assert_eq!(config.ncomponent, 2);
        assert_eq!(config.validate(), None);
        assert_eq!(config.set_minor_component(2, 0).err(), Some("phase index is out of range"));
        assert_eq!(
            config.set_minor_component(0, 2).err(),
            Some("component index is out of range")
        );

        config.ncomponent = 1;
        assert_eq!(
            config.validate(),
            Some("minor_component[0] = 1 is incorrect; it must be < ncomponent = 1".to_string())
        );
        config.ndim = 5;
        assert_eq!(
            config.validate(),
            Some("ndim = 5 is incorrect; it must be 1, 2, or 3".to_string())
        );
        Ok(())
    }

    #[test]
    fn json_works() -> Result<(), StrError> {
        let mut config = Config::new();
        config.set_ndim(1)?.set_enable_gravity(true)?;
        let json = serde_json::to_string(&config).map_err(|_| "cannot serialize")?;
        let read = Config::from_json(&json)?;
        assert_eq!(read, config);

        let path = "/tmp/pmbox/test/config_json_works.json";
        config.write_json(path)?;
        let read = Config::read_json(path)?;
        assert_eq!(read, config);

        assert_eq!(Config::from_json("{").err(), Some("cannot parse JSON configuration"));
        config.nphase = 0;
        let json = serde_json::to_string(&config).map_err(|_| "cannot serialize")?;
        assert_eq!(Config::from_json(&json).err(), Some("JSON configuration is inconsistent"));
        assert_eq!(Config::read_json("/tmp/pmbox/__not_there__.json").err(), Some("file not found"));
        Ok(())
    }
}
