//! Weather condition decoding
//!
//! Each provider reports conditions with its own numbering. The companion
//! passes the provider's code through (Weather Underground icons are first
//! folded onto forecast codes), so decoding needs to know which service
//! produced the number.

use crate::config::WeatherService;

/// Conditions the face knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Condition {
    Clear,
    PartlyCloudy,
    MostlyCloudy,
    Cloudy,
    Haze,
    Fog,
    ChanceRain,
    Rain,
    ChanceStorms,
    Storms,
    Sleet,
    ChanceSnow,
    Snow,
    Wind,
    #[default]
    Unknown,
}

impl Condition {
    /// Decode a current-conditions code from `service`
    pub fn decode(service: WeatherService, code: u16) -> Self {
        match service {
            WeatherService::OpenWeather => Self::from_openweather(code),
            WeatherService::Yahoo => Self::from_yahoo(code),
            WeatherService::Wunderground => Self::from_forecast_code(code),
        }
    }

    /// Weather Underground hourly forecast code (`fctcode`, 1-24)
    ///
    /// Hourly slots always use this numbering.
    pub fn from_forecast_code(code: u16) -> Self {
        match code {
            1 => Self::Clear,
            2 => Self::PartlyCloudy,
            3 => Self::MostlyCloudy,
            4 => Self::Cloudy,
            5 => Self::Haze,
            6 => Self::Fog,
            10 | 12 => Self::ChanceRain,
            11 | 13 => Self::Rain,
            14 => Self::ChanceStorms,
            15 => Self::Storms,
            16 | 22 | 23 => Self::Sleet,
            18 | 20 => Self::ChanceSnow,
            9 | 19 | 21 | 24 => Self::Snow,
            _ => Self::Unknown,
        }
    }

    /// OpenWeatherMap condition id
    pub fn from_openweather(id: u16) -> Self {
        match id {
            200..=299 => Self::Storms,
            300..=399 => Self::ChanceRain,
            511 | 611..=616 => Self::Sleet,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            701 | 741 => Self::Fog,
            711 | 721 | 731 | 751 | 761 | 762 => Self::Haze,
            771 | 781 => Self::Wind,
            800 => Self::Clear,
            801 | 802 => Self::PartlyCloudy,
            803 => Self::MostlyCloudy,
            804 => Self::Cloudy,
            _ => Self::Unknown,
        }
    }

    /// Yahoo weather condition code (0-47)
    pub fn from_yahoo(code: u16) -> Self {
        match code {
            0..=4 | 37..=39 | 45 | 47 => Self::Storms,
            5..=7 | 10 | 17 | 18 | 35 => Self::Sleet,
            8 | 9 | 11 | 12 => Self::Rain,
            40 => Self::ChanceRain,
            13..=16 | 41..=43 | 46 => Self::Snow,
            19 | 21 | 22 => Self::Haze,
            20 => Self::Fog,
            23 | 24 => Self::Wind,
            26 => Self::Cloudy,
            27 | 28 => Self::MostlyCloudy,
            29 | 30 | 44 => Self::PartlyCloudy,
            25 | 31..=34 | 36 => Self::Clear,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_codes() {
        assert_eq!(Condition::from_forecast_code(1), Condition::Clear);
        assert_eq!(Condition::from_forecast_code(13), Condition::Rain);
        assert_eq!(Condition::from_forecast_code(15), Condition::Storms);
        assert_eq!(Condition::from_forecast_code(21), Condition::Snow);
        assert_eq!(Condition::from_forecast_code(7), Condition::Unknown);
        assert_eq!(Condition::from_forecast_code(0), Condition::Unknown);
    }

    #[test]
    fn test_openweather_ranges() {
        assert_eq!(Condition::from_openweather(211), Condition::Storms);
        assert_eq!(Condition::from_openweather(501), Condition::Rain);
        assert_eq!(Condition::from_openweather(511), Condition::Sleet);
        assert_eq!(Condition::from_openweather(601), Condition::Snow);
        assert_eq!(Condition::from_openweather(741), Condition::Fog);
        assert_eq!(Condition::from_openweather(800), Condition::Clear);
        assert_eq!(Condition::from_openweather(804), Condition::Cloudy);
        assert_eq!(Condition::from_openweather(900), Condition::Unknown);
    }

    #[test]
    fn test_yahoo_codes() {
        assert_eq!(Condition::from_yahoo(4), Condition::Storms);
        assert_eq!(Condition::from_yahoo(12), Condition::Rain);
        assert_eq!(Condition::from_yahoo(16), Condition::Snow);
        assert_eq!(Condition::from_yahoo(32), Condition::Clear);
        assert_eq!(Condition::from_yahoo(3200), Condition::Unknown);
    }

    #[test]
    fn test_decode_depends_on_service() {
        // 13 is rain for forecast codes but snow flurries for Yahoo
        assert_eq!(
            Condition::decode(WeatherService::Wunderground, 13),
            Condition::Rain
        );
        assert_eq!(Condition::decode(WeatherService::Yahoo, 13), Condition::Snow);
    }
}
