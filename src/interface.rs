/// Addressing details scraped for one interface.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub ipv4: Option<String>,
    pub netmask: Option<String>,
    pub ipv6: Option<String>,
    pub mac: Option<String>,
    pub default_gateway: Option<String>,
}

impl InterfaceRecord {
    pub fn new(name: &str) -> InterfaceRecord {
        InterfaceRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Only records carrying an IPv4 or IPv6 address are worth reporting.
    pub fn has_address(&self) -> bool {
        self.ipv4.is_some() || self.ipv6.is_some()
    }

    /// Populated fields as `(label, value)` in display order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("IPv4 Address", &self.ipv4),
            ("Subnet Mask", &self.netmask),
            ("IPv6 Address", &self.ipv6),
            ("MAC Address", &self.mac),
            ("Default Gateway", &self.default_gateway),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
    }
}

/// Interface records in the order they appeared in the listing.
#[derive(Debug, Default)]
pub struct InterfaceTable {
    records: Vec<InterfaceRecord>,
}

impl InterfaceTable {
    pub fn new() -> InterfaceTable {
        InterfaceTable {
            records: Vec::new(),
        }
    }

    /// Adds a record. A record with a known name replaces the old one in place.
    pub fn insert(&mut self, record: InterfaceRecord) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&InterfaceRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceRecord> {
        self.records.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
