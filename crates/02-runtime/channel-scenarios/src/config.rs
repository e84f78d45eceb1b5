#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioType {
    Flood = 0,
    Burst = 1,
    FanIn = 2,
    Pipe = 3,
}

impl ScenarioType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(ScenarioType::Flood),
            1 => Some(ScenarioType::Burst),
            2 => Some(ScenarioType::FanIn),
            3 => Some(ScenarioType::Pipe),
            _ => None,
        }
    }
}

/// Flat scenario description: a type code plus two type-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub scenario: u32,
    pub param1: u32,
    pub param2: u32,
}

impl ScenarioConfig {
    /// One producer sending `items` values back to back.
    pub fn flood(items: u32) -> Self {
        Self {
            scenario: ScenarioType::Flood as u32,
            param1: items,
            param2: 0,
        }
    }

    /// One producer sending `bursts` groups of `burst_size` values with a pause between groups.
    pub fn burst(bursts: u32, burst_size: u32) -> Self {
        Self {
            scenario: ScenarioType::Burst as u32,
            param1: bursts,
            param2: burst_size,
        }
    }

    /// `producers` threads sharing one channel, each sending `items_per_producer` values.
    pub fn fan_in(producers: u32, items_per_producer: u32) -> Self {
        Self {
            scenario: ScenarioType::FanIn as u32,
            param1: producers,
            param2: items_per_producer,
        }
    }

    /// Two byte-channel producers, each decoded by a pipe into one shared typed channel.
    pub fn pipe(records: u32) -> Self {
        Self {
            scenario: ScenarioType::Pipe as u32,
            param1: records,
            param2: 0,
        }
    }

    pub fn scenario_kind(&self) -> Option<ScenarioKind> {
        let ty = ScenarioType::from_u32(self.scenario)?;
        Some(match ty {
            ScenarioType::Flood => ScenarioKind::Flood { items: self.param1 },
            ScenarioType::Burst => ScenarioKind::Burst {
                bursts: self.param1,
                burst_size: self.param2,
            },
            ScenarioType::FanIn => ScenarioKind::FanIn {
                producers: self.param1,
                items_per_producer: self.param2,
            },
            ScenarioType::Pipe => ScenarioKind::Pipe {
                records: self.param1,
            },
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioKind {
    Flood { items: u32 },
    Burst { bursts: u32, burst_size: u32 },
    FanIn { producers: u32, items_per_producer: u32 },
    Pipe { records: u32 },
}

impl ScenarioKind {
    /// Number of producers the scenario runs.
    pub fn producers(&self) -> u32 {
        match *self {
            ScenarioKind::Flood { .. } | ScenarioKind::Burst { .. } => 1,
            ScenarioKind::FanIn { producers, .. } => producers,
            ScenarioKind::Pipe { .. } => 2,
        }
    }

    /// Number of values each producer sends.
    pub fn items_per_producer(&self) -> u32 {
        match *self {
            ScenarioKind::Flood { items } => items,
            ScenarioKind::Burst { bursts, burst_size } => bursts.saturating_mul(burst_size),
            ScenarioKind::FanIn {
                items_per_producer, ..
            } => items_per_producer,
            ScenarioKind::Pipe { records } => records,
        }
    }

    pub fn expected_total(&self) -> u64 {
        u64::from(self.producers()) * u64::from(self.items_per_producer())
    }
}
