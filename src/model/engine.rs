use serde::{Deserialize, Serialize};

/// Fuel/energy type of the powertrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Gasoline,
    Diesel,
    Hybrid,
    PluginHybrid,
    Electric,
    Lpg,
    Cng,
    Hydrogen,
}

impl EngineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Diesel => "diesel",
            Self::Hybrid => "hybrid",
            Self::PluginHybrid => "plugin_hybrid",
            Self::Electric => "electric",
            Self::Lpg => "lpg",
            Self::Cng => "cng",
            Self::Hydrogen => "hydrogen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveType {
    FrontWheelDrive,
    RearWheelDrive,
    AllWheelDrive,
    Quattro,
    Xdrive,
    EFour,
}

impl DriveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontWheelDrive => "front_wheel_drive",
            Self::RearWheelDrive => "rear_wheel_drive",
            Self::AllWheelDrive => "all_wheel_drive",
            Self::Quattro => "quattro",
            Self::Xdrive => "xdrive",
            Self::EFour => "e_four",
        }
    }

    /// Human-readable label used in engine descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontWheelDrive => "front-wheel drive",
            Self::RearWheelDrive => "rear-wheel drive",
            Self::AllWheelDrive => "all-wheel drive",
            Self::Quattro => "quattro",
            Self::Xdrive => "xDrive",
            Self::EFour => "E-Four",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionType {
    Manual,
    Automatic,
    Cvt,
    Dct,
    Dsg,
    Pdk,
    Amt,
}

impl TransmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
            Self::Cvt => "cvt",
            Self::Dct => "dct",
            Self::Dsg => "dsg",
            Self::Pdk => "pdk",
            Self::Amt => "amt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
            Self::Cvt => "CVT",
            Self::Dct => "DCT",
            Self::Dsg => "DSG",
            Self::Pdk => "PDK",
            Self::Amt => "AMT",
        }
    }
}

/// Engine attributes extracted from free-form listing text.
///
/// Every attribute is optional; a missing match leaves the field `None`. `engine_text` keeps
/// the text the attributes were extracted from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub displacement: Option<String>,
    pub power_hp: Option<i32>,
    #[serde(rename = "type")]
    pub engine_type: Option<EngineType>,
    pub drive: Option<DriveType>,
    pub transmission: Option<TransmissionType>,
    pub engine_text: String,
}

impl EngineInfo {
    /// Returns true when no attribute was recognized.
    pub fn is_empty(&self) -> bool {
        self.displacement.is_none()
            && self.power_hp.is_none()
            && self.engine_type.is_none()
            && self.drive.is_none()
            && self.transmission.is_none()
    }

    /// Renders a short summary such as `2.0 TSI, 150 hp, all-wheel drive, DSG`.
    ///
    /// Returns `-` when nothing was recognized.
    pub fn description(&self) -> String {
        let mut parts = Vec::new();

        if let Some(displacement) = &self.displacement {
            parts.push(displacement.clone());
        }
        if let Some(power_hp) = self.power_hp {
            parts.push(format!("{} hp", power_hp));
        }
        if let Some(drive) = self.drive {
            parts.push(drive.label().to_string());
        }
        if let Some(transmission) = self.transmission {
            parts.push(transmission.label().to_string());
        }

        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(", ")
        }
    }
}
