use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportMode {
    /// Bus or train
    Public,
    /// Car or two-wheeler
    Private,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Public => "Public transport (bus/train)",
            TransportMode::Private => "Private transport (car/two-wheeler)",
        }
    }
}
