use super::Direction;

/// One row of the ISO/OSI stack with its walkthrough details.
#[derive(Debug, Clone, Copy)]
pub struct LayerProfile {
    pub number: u8,
    pub name: &'static str,
    pub short: &'static str,
    pub role: &'static str,
    pub down: LayerDetail,
    /// Receiving-side variant; layers without one reuse `down`.
    pub up: Option<LayerDetail>,
}

#[derive(Debug, Clone, Copy)]
pub struct LayerDetail {
    pub icon: &'static str,
    pub protocol: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub hex: &'static [&'static str],
    pub size: &'static str,
}

impl LayerProfile {
    pub fn detail(&self, direction: Direction) -> &LayerDetail {
        match (direction, &self.up) {
            (Direction::Up, Some(up)) => up,
            _ => &self.down,
        }
    }
}

/// Top of the stack first.
pub const LAYERS: [LayerProfile; 7] = [
    LayerProfile {
        number: 7,
        name: "Applicazione",
        short: "APP",
        role: "Interfaccia utente, protocolli applicativi",
        down: LayerDetail {
            icon: "\u{1F4F1}",
            protocol: "WhatsApp + Signal Protocol",
            description: "Il messaggio \"ciao\" viene preparato dall'app WhatsApp e criptato con il protocollo Signal (crittografia end-to-end)",
            details: &[
                "Message ID: 3EB0A8C7D2F4E6B8...",
                "Sender: 393331234567@s.whatsapp.net",
                "Recipient: 393479876543@s.whatsapp.net",
                "Encryption: AES-256-GCM",
            ],
            hex: &[
                "63", "69", "61", "6F", "\u{2192}", "7F", "2A", "8B", "4C", "9D", "1E", "6F", "3A",
            ],
            size: "4 byte \u{2192} 324 byte",
        },
        up: None,
    },
    LayerProfile {
        number: 6,
        name: "Presentazione",
        short: "PRES",
        role: "Codifica, crittografia, compressione",
        down: LayerDetail {
            icon: "\u{1F504}",
            protocol: "Protocol Buffers + TLS 1.3",
            description: "I dati vengono serializzati in formato binario (Protobuf) e poi criptati con TLS per il trasporto sicuro",
            details: &[
                "Serialization: Protocol Buffers",
                "TLS Version: 1.3",
                "Cipher: AES-256-GCM",
                "Auth Tag: 16 byte",
            ],
            hex: &[
                "17", "03", "03", "01", "B5", "4A", "7B", "2C", "8D", "1E", "5F", "3A", "9B",
            ],
            size: "324 byte \u{2192} 429 byte",
        },
        up: None,
    },
    LayerProfile {
        number: 5,
        name: "Sessione",
        short: "SESS",
        role: "Gestione sessioni e dialogo",
        down: LayerDetail {
            icon: "\u{1F517}",
            protocol: "WebSocket (WSS)",
            description: "La connessione WebSocket mantiene il canale aperto per comunicazione bidirezionale in tempo reale",
            details: &[
                "FIN: 1 (messaggio completo)",
                "Opcode: 0x2 (binary)",
                "MASK: 1 (client\u{2192}server)",
                "Masking Key: 37 4E 8A F1",
            ],
            hex: &[
                "82", "FE", "01", "AD", "37", "4E", "8A", "F1", "20", "4D", "89", "F0",
            ],
            size: "429 byte \u{2192} 437 byte",
        },
        up: None,
    },
    LayerProfile {
        number: 4,
        name: "Trasporto",
        short: "TRANS",
        role: "Trasporto affidabile end-to-end",
        down: LayerDetail {
            icon: "\u{1F69A}",
            protocol: "TCP (Transmission Control Protocol)",
            description: "TCP garantisce la consegna affidabile dei dati con controllo di flusso e ritrasmissione",
            details: &[
                "Src Port: 52431 (effimera)",
                "Dst Port: 443 (HTTPS)",
                "Seq: 1513893917",
                "Flags: ACK, PSH",
            ],
            hex: &[
                "CC", "CF", "01", "BB", "5A", "3B", "2C", "1D", "8F", "7E", "6D", "5C", "50", "18",
            ],
            size: "437 byte \u{2192} 469 byte",
        },
        up: None,
    },
    LayerProfile {
        number: 3,
        name: "Rete",
        short: "NET",
        role: "Indirizzamento logico e routing",
        down: LayerDetail {
            icon: "\u{1F310}",
            protocol: "IPv4 + NAT",
            description: "Il pacchetto IP contiene gli indirizzi logici. Il router applica NAT per tradurre IP privato\u{2192}pubblico",
            details: &[
                "Src IP: 192.168.1.100 \u{2192} 82.53.147.201",
                "Dst IP: 157.240.1.52",
                "TTL: 64",
                "Protocol: 6 (TCP)",
            ],
            hex: &[
                "45", "00", "01", "E9", "4A", "2B", "40", "00", "40", "06", "C0", "A8", "01", "64",
                "9D", "F0", "01", "34",
            ],
            size: "469 byte \u{2192} 489 byte",
        },
        up: None,
    },
    LayerProfile {
        number: 2,
        name: "Data Link",
        short: "DATA",
        role: "Indirizzamento fisico e accesso al mezzo",
        down: LayerDetail {
            icon: "\u{1F4E1}",
            protocol: "IEEE 802.11 (WiFi)",
            description: "Il frame WiFi include indirizzi MAC, crittografia WPA2 e controllo errori (FCS)",
            details: &[
                "Dest MAC: AA:BB:CC:DD:EE:FF (AP)",
                "Src MAC: 11:22:33:44:55:66",
                "Security: WPA2-CCMP (AES)",
                "FCS: CRC-32",
            ],
            hex: &[
                "08", "41", "00", "7D", "AA", "BB", "CC", "DD", "EE", "FF", "11", "22", "33", "44",
                "55", "66",
            ],
            size: "489 byte \u{2192} 549 byte",
        },
        up: Some(LayerDetail {
            icon: "\u{1F50C}",
            protocol: "IEEE 802.3 (Ethernet)",
            description: "Il frame Ethernet trasporta il pacchetto sulla rete cablata locale",
            details: &[
                "Dest MAC: 78:45:C4:AB:CD:EF (PC)",
                "Src MAC: 00:11:22:33:44:55",
                "EtherType: 0x0800 (IPv4)",
                "FCS: CRC-32",
            ],
            hex: &[
                "08", "41", "00", "7D", "AA", "BB", "CC", "DD", "EE", "FF", "11", "22", "33", "44",
                "55", "66",
            ],
            size: "489 byte \u{2192} 549 byte",
        }),
    },
    LayerProfile {
        number: 1,
        name: "Fisico",
        short: "PHY",
        role: "Trasmissione bit sul mezzo fisico",
        down: LayerDetail {
            icon: "\u{1F4F6}",
            protocol: "802.11ac OFDM",
            description: "I bit vengono modulati in onde radio usando OFDM con 256-QAM a 5 GHz",
            details: &[
                "Frequenza: 5180 MHz (Ch 36)",
                "Bandwidth: 80 MHz",
                "Modulazione: 256-QAM",
                "Tempo TX: ~52 \u{3bc}s",
            ],
            hex: &[],
            size: "\u{223F}\u{223F}\u{223F} Onde Radio \u{223F}\u{223F}\u{223F}",
        },
        up: Some(LayerDetail {
            icon: "\u{26A1}",
            protocol: "Gigabit Ethernet",
            description: "I bit viaggiano come segnali elettrici PAM-5 sul cavo twisted pair",
            details: &[
                "Standard: 1000BASE-T",
                "Codifica: PAM-5",
                "4 coppie bidirezionali",
                "Rate: 1 Gbps",
            ],
            hex: &[],
            size: "\u{2500}\u{2500}\u{2500} Segnali Elettrici \u{2500}\u{2500}\u{2500}",
        }),
    },
];

/// Look up a layer by its number (1..=7).
pub fn layer(number: u8) -> Option<&'static LayerProfile> {
    LAYERS.iter().find(|l| l.number == number)
}

/// Layer shown by the walkthrough widget at a given animation step.
///
/// Downward starts at L7 and reaches L1 at step 6; upward mirrors it.
pub fn walk_layer(direction: Direction, step: u8) -> u8 {
    let offset = step.min(6);
    match direction {
        Direction::Down => 7 - offset,
        Direction::Up => 1 + offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_ordered_top_down() {
        let numbers: Vec<u8> = LAYERS.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(layer(4).map(|l| l.short), Some("TRANS"));
        assert!(layer(0).is_none());
        assert!(layer(8).is_none());
    }

    #[test]
    fn test_up_variant_falls_back_to_down() {
        let l7 = layer(7).unwrap();
        assert_eq!(l7.detail(Direction::Up).protocol, l7.down.protocol);
        let l2 = layer(2).unwrap();
        assert_eq!(l2.detail(Direction::Down).protocol, "IEEE 802.11 (WiFi)");
        assert_eq!(l2.detail(Direction::Up).protocol, "IEEE 802.3 (Ethernet)");
    }

    #[test]
    fn test_physical_layer_has_no_header_bytes() {
        let l1 = layer(1).unwrap();
        assert!(l1.down.hex.is_empty());
        assert!(l1.detail(Direction::Up).hex.is_empty());
    }

    #[test]
    fn test_walk_layer_follows_step() {
        assert_eq!(walk_layer(Direction::Down, 0), 7);
        assert_eq!(walk_layer(Direction::Down, 6), 1);
        assert_eq!(walk_layer(Direction::Down, 10), 1);
        assert_eq!(walk_layer(Direction::Up, 0), 1);
        assert_eq!(walk_layer(Direction::Up, 3), 4);
        assert_eq!(walk_layer(Direction::Up, 10), 7);
    }
}
