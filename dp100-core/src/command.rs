//! DP100 protocol command definitions

use std::fmt;

use crate::error::{Error, Result};

/// Protocol command codes
///
/// Function codes understood by the ATK-MDP100 firmware. The same byte is
/// echoed back as the function type of the matching response.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    // Device identification
    DeviceInfo = 16,
    FirmwareInfo = 17,

    // Firmware upgrade
    StartTransaction = 18,
    DataTransaction = 19,
    EndTransaction = 20,
    DeviceUpgrade = 21,

    // Output state and presets
    BasicInfo = 48,
    BasicSet = 53,

    // System settings
    SystemInfo = 64,
    SystemSet = 69,

    // Scan / serial output
    ScanOut = 80,
    SerialOut = 85,

    Disconnect = 128,
    None = 255,
}

impl Command {
    /// Every known command, in wire-code order
    pub const ALL: [Command; 14] = [
        Self::DeviceInfo,
        Self::FirmwareInfo,
        Self::StartTransaction,
        Self::DataTransaction,
        Self::EndTransaction,
        Self::DeviceUpgrade,
        Self::BasicInfo,
        Self::BasicSet,
        Self::SystemInfo,
        Self::SystemSet,
        Self::ScanOut,
        Self::SerialOut,
        Self::Disconnect,
        Self::None,
    ];

    /// Wire byte for this command
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Check if this command belongs to the firmware upgrade exchange
    pub fn is_upgrade(self) -> bool {
        matches!(
            self,
            Self::StartTransaction
                | Self::DataTransaction
                | Self::EndTransaction
                | Self::DeviceUpgrade
        )
    }

    /// Check if this command writes settings to the device
    pub fn is_setter(self) -> bool {
        matches!(self, Self::BasicSet | Self::SystemSet)
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::DeviceInfo => "DEVICE_INFO",
            Self::FirmwareInfo => "FIRMWARE_INFO",
            Self::StartTransaction => "START_TRANSACTION",
            Self::DataTransaction => "DATA_TRANSACTION",
            Self::EndTransaction => "END_TRANSACTION",
            Self::DeviceUpgrade => "DEVICE_UPGRADE",
            Self::BasicInfo => "BASIC_INFO",
            Self::BasicSet => "BASIC_SET",
            Self::SystemInfo => "SYSTEM_INFO",
            Self::SystemSet => "SYSTEM_SET",
            Self::ScanOut => "SCAN_OUT",
            Self::SerialOut => "SERIAL_OUT",
            Self::Disconnect => "DISCONNECT",
            Self::None => "NONE",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            16 => Ok(Self::DeviceInfo),
            17 => Ok(Self::FirmwareInfo),
            18 => Ok(Self::StartTransaction),
            19 => Ok(Self::DataTransaction),
            20 => Ok(Self::EndTransaction),
            21 => Ok(Self::DeviceUpgrade),
            48 => Ok(Self::BasicInfo),
            53 => Ok(Self::BasicSet),
            64 => Ok(Self::SystemInfo),
            69 => Ok(Self::SystemSet),
            80 => Ok(Self::ScanOut),
            85 => Ok(Self::SerialOut),
            128 => Ok(Self::Disconnect),
            255 => Ok(Self::None),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_conversion() {
        assert_eq!(u8::from(Command::BasicInfo), 48);
        assert_eq!(Command::try_from(48).unwrap(), Command::BasicInfo);
        assert_eq!(Command::Disconnect.code(), 128);
    }

    #[test]
    fn test_wire_codes() {
        let codes: Vec<u8> = Command::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            vec![16, 17, 18, 19, 20, 21, 48, 53, 64, 69, 80, 85, 128, 255]
        );
    }

    #[test]
    fn test_all_commands_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::try_from(u8::from(command)).unwrap(), command);
        }
    }

    #[test]
    fn test_unknown_command() {
        let result = Command::try_from(0);
        assert!(matches!(result, Err(Error::UnknownCommand(0))));

        let known = (0..=u8::MAX)
            .filter(|code| Command::try_from(*code).is_ok())
            .count();
        assert_eq!(known, Command::ALL.len());
    }

    #[test]
    fn test_command_groups() {
        assert!(Command::DataTransaction.is_upgrade());
        assert!(!Command::BasicInfo.is_upgrade());
        assert!(Command::BasicSet.is_setter());
        assert!(!Command::SystemInfo.is_setter());
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::BasicInfo.to_string(), "BASIC_INFO(48)");
    }
}
