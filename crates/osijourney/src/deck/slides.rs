//! The slide content table.
//!
//! Every value shown on screen (addresses, ports, hex bytes, sizes) is an
//! illustrative constant; nothing here is derived from real traffic.

use super::*;

pub const DECK_TITLE: &str = "Il Viaggio del Messaggio";

const SCHOOL: &str = "ITTS Belluzzi Da Vinci - Sistemi e Reti";

/// Every slide of the richest edition, in order. [`Deck::new`] filters them.
pub fn all() -> Vec<Slide> {
    vec![
        intro(),
        overview(),
        encapsulation_walk(),
        application_down(),
        presentation_session_down(),
        transport_network_down(),
        link_physical_down(),
        internet_journey(),
        physical_link_up(),
        network_transport_up(),
        upper_layers_up(),
        decapsulation_walk(),
        encryption(),
        summary(),
        review(),
        end(),
    ]
}

fn slide(key: &'static str, title: &'static str, tone: Tone) -> Slide {
    Slide {
        key,
        title,
        subtitle: None,
        icon: None,
        tone,
        badge: None,
        layout: Layout::Standard,
        edition: Edition::Core,
        bands: Vec::new(),
        info: Vec::new(),
    }
}

fn info(label: &'static str, key: &'static str) -> InfoLink {
    InfoLink { label, key }
}

fn intro() -> Slide {
    Slide {
        layout: Layout::Centered,
        bands: vec![full(vec![
            centered(DECK_TITLE, Tone::Cyan, TextSize::Display),
            centered(
                "\"ciao\" attraverso ISO/OSI",
                Tone::Muted,
                TextSize::Subtitle,
            ),
            widget(Widget::Endpoints {
                from: Endpoint {
                    icon: "\u{1F4F1}",
                    label: "WhatsApp App",
                    address: "192.168.1.100",
                },
                to: Endpoint {
                    icon: "\u{1F4BB}",
                    label: "WhatsApp Web",
                    address: "192.168.2.50",
                },
                message: "\u{2192} \"ciao\" \u{2192}",
            }),
            centered(
                "Seguiamo il percorso completo di un semplice messaggio attraverso i 7 livelli della pila ISO/OSI, dal telefono al PC",
                Tone::Muted,
                TextSize::Body,
            ),
            centered(SCHOOL, Tone::Muted, TextSize::Small),
        ])],
        info: vec![info("Perch\u{e9} a livelli?", "osi")],
        ..slide("intro", DECK_TITLE, Tone::Cyan)
    }
}

fn overview() -> Slide {
    Slide {
        icon: Some("\u{1F4DA}"),
        bands: vec![band(vec![
            vec![widget(Widget::LayerList)],
            vec![
                centered("INCAPSULAMENTO", Tone::Muted, TextSize::Small),
                widget(Widget::Encapsulation),
                centered(
                    "Ogni livello aggiunge il proprio header",
                    Tone::Muted,
                    TextSize::Small,
                ),
            ],
        ])],
        info: vec![info("Incapsulamento", "encapsulation")],
        ..slide("overview", "La Pila ISO/OSI", Tone::Cyan)
    }
}

fn encapsulation_walk() -> Slide {
    Slide {
        subtitle: Some("Dal livello 7 al livello 1, un header alla volta"),
        icon: Some("\u{2B07}"),
        badge: Some(Direction::Down),
        edition: Edition::Extended,
        bands: vec![full(vec![widget(Widget::LayerWalk {
            direction: Direction::Down,
        })])],
        info: vec![info("Le PDU", "pdu")],
        ..slide("walk-down", "Discesa nella pila", Tone::Cyan)
    }
}

fn application_down() -> Slide {
    Slide {
        subtitle: Some("WhatsApp + Signal Protocol"),
        icon: Some("\u{1F4F1}"),
        badge: Some(Direction::Down),
        bands: vec![band(vec![
            vec![
                card(
                    "MESSAGGIO ORIGINALE",
                    Tone::Red,
                    vec![
                        centered("\"ciao\"", Tone::Plain, TextSize::Title),
                        centered("UTF-8: 63 69 61 6F (4 byte)", Tone::Muted, TextSize::Small),
                    ],
                ),
                card(
                    "CRITTOGRAFIA END-TO-END",
                    Tone::Red,
                    vec![Block::Fields {
                        rows: vec![
                            field("Algoritmo", "Signal Protocol"),
                            field("Cifratura", "AES-256-GCM"),
                            field("Scambio chiavi", "Curve25519 (ECDH)"),
                            Field {
                                tone: Some(Tone::Green),
                                ..field("Double Ratchet", "\u{2713} Attivo")
                            },
                        ],
                        tone: Tone::Red,
                        mono: true,
                    }],
                ),
            ],
            vec![
                card(
                    "STRUTTURA MESSAGGIO WHATSAPP",
                    Tone::Red,
                    vec![fields(
                        Tone::Red,
                        &[
                            ("message_id", "3EB0A8C7D2F4E6B8..."),
                            ("sender_jid", "393331234567@s.whatsapp.net"),
                            ("recipient_jid", "393479876543@s.whatsapp.net"),
                            ("timestamp", "1702640400"),
                            ("encrypted_payload", "[Signal Ciphertext]"),
                        ],
                    )],
                ),
                card(
                    "OUTPUT L7",
                    Tone::Red,
                    vec![
                        hex(
                            &[
                                "7F", "2A", "8B", "4C", "9D", "1E", "6F", "3A", "5B", "2C", "8D",
                                "4E", "F1", "A2", "B3", "C4",
                            ],
                            &[0, 1, 2, 3],
                        ),
                        styled(
                            "4 byte \u{2192} 324 byte (criptato + metadata)",
                            Tone::Muted,
                            TextSize::Small,
                        ),
                    ],
                ),
            ],
        ])],
        info: vec![info("Signal Protocol", "signal")],
        ..slide("l7-down", "Livello 7 - Applicazione", Tone::Red)
    }
}

fn presentation_session_down() -> Slide {
    Slide {
        subtitle: Some("Protocol Buffers + TLS 1.3 + WebSocket"),
        icon: Some("\u{1F504}"),
        badge: Some(Direction::Down),
        bands: vec![band(vec![
            vec![card(
                "L6 - PRESENTAZIONE",
                Tone::Yellow,
                vec![
                    card(
                        "Serializzazione Protobuf",
                        Tone::Yellow,
                        vec![
                            mono("0A 20 [message_id: 32 byte]", Tone::Plain),
                            mono("12 1E [sender: 30 byte]", Tone::Plain),
                            mono("1A 1E [recipient: 30 byte]", Tone::Plain),
                            mono("20 [timestamp: varint]", Tone::Plain),
                            mono("2A [encrypted: 300 byte]", Tone::Plain),
                        ],
                    ),
                    card(
                        "Crittografia TLS 1.3",
                        Tone::Yellow,
                        vec![fields(
                            Tone::Yellow,
                            &[
                                ("Content Type", "0x17 (App Data)"),
                                ("Cipher Suite", "AES-256-GCM"),
                                ("Auth Tag", "16 byte"),
                            ],
                        )],
                    ),
                    centered("324 byte \u{2192} 429 byte", Tone::Yellow, TextSize::Small),
                ],
            )],
            vec![card(
                "L5 - SESSIONE",
                Tone::Cyan,
                vec![
                    card(
                        "WebSocket Frame",
                        Tone::Cyan,
                        vec![tiles(
                            Tone::Cyan,
                            &[
                                ("FIN", "1"),
                                ("Opcode", "0x2 (binary)"),
                                ("MASK", "1"),
                                ("Length", "429"),
                            ],
                        )],
                    ),
                    card(
                        "Masking (XOR)",
                        Tone::Cyan,
                        vec![fields(
                            Tone::Cyan,
                            &[
                                ("Key", "37 4E 8A F1"),
                                ("Original", "17 03 03 01"),
                                ("Masked", "20 4D 89 F0"),
                            ],
                        )],
                    ),
                    centered("429 byte \u{2192} 437 byte", Tone::Cyan, TextSize::Small),
                ],
            )],
        ])],
        info: vec![info("TLS 1.3", "tls"), info("WebSocket", "websocket")],
        ..slide(
            "l6-l5-down",
            "L6 Presentazione + L5 Sessione",
            Tone::Yellow,
        )
    }
}

fn transport_network_down() -> Slide {
    Slide {
        subtitle: Some("TCP + IPv4 + NAT"),
        icon: Some("\u{1F69A}"),
        badge: Some(Direction::Down),
        bands: vec![band(vec![
            vec![card(
                "L4 - TCP SEGMENT",
                Tone::Green,
                vec![
                    tiles(
                        Tone::Green,
                        &[
                            ("Src Port", "52431"),
                            ("Dst Port", "443"),
                            ("Seq Number", "1513893917"),
                            ("Ack Number", "2407431516"),
                        ],
                    ),
                    Block::Flags {
                        on: vec!["ACK", "PSH"],
                        off: vec!["SYN", "FIN", "RST"],
                    },
                    styled(
                        "Header: 32 byte | 437 byte \u{2192} 469 byte",
                        Tone::Muted,
                        TextSize::Small,
                    ),
                ],
            )],
            vec![card(
                "L3 - IP PACKET + NAT",
                Tone::Purple,
                vec![
                    Block::Fields {
                        rows: vec![
                            Field {
                                previous: Some("192.168.1.100"),
                                ..field("Src IP", "82.53.147.201")
                            },
                            field("Dst IP", "157.240.1.52"),
                            field("TTL", "64"),
                            field("Protocol", "6 (TCP)"),
                        ],
                        tone: Tone::Purple,
                        mono: true,
                    },
                    callout(
                        Tone::Orange,
                        Some("\u{1F504} NAT Translation"),
                        &["192.168.1.100:52431 \u{2192} 82.53.147.201:34567"],
                    ),
                    styled(
                        "Header: 20 byte | 469 byte \u{2192} 489 byte",
                        Tone::Muted,
                        TextSize::Small,
                    ),
                ],
            )],
        ])],
        info: vec![info("TCP", "tcp"), info("NAT", "nat")],
        ..slide("l4-l3-down", "L4 Trasporto + L3 Rete", Tone::Green)
    }
}

fn link_physical_down() -> Slide {
    Slide {
        subtitle: Some("IEEE 802.11 WiFi + OFDM"),
        icon: Some("\u{1F4E1}"),
        badge: Some(Direction::Down),
        bands: vec![band(vec![
            vec![card(
                "L2 - WIFI FRAME (802.11)",
                Tone::Orange,
                vec![
                    tiles(
                        Tone::Orange,
                        &[("Frame Control", "0x08 0x41"), ("Duration", "125 \u{3bc}s")],
                    ),
                    styled("Indirizzi MAC:", Tone::Muted, TextSize::Small),
                    mono("RA: AA:BB:CC:DD:EE:FF (AP)", Tone::Orange),
                    mono("TA: 11:22:33:44:55:66 (Phone)", Tone::Orange),
                    mono("DA: 00:11:22:33:44:55 (Router)", Tone::Orange),
                    callout(
                        Tone::Red,
                        Some("\u{1F510} WPA2-CCMP"),
                        &["AES-128-CCM + MIC 8 byte"],
                    ),
                    styled("489 byte \u{2192} 549 byte", Tone::Muted, TextSize::Small),
                ],
            )],
            vec![card(
                "L1 - TRASMISSIONE RADIO",
                Tone::Cyan,
                vec![
                    tiles(
                        Tone::Cyan,
                        &[
                            ("Frequenza", "5180 MHz"),
                            ("Bandwidth", "80 MHz"),
                            ("Modulazione", "256-QAM"),
                            ("Tempo TX", "~52 \u{3bc}s"),
                        ],
                    ),
                    tiles(
                        Tone::Cyan,
                        &[(
                            "OFDM Symbol",
                            "234 subcarrier \u{d7} 8 bit \u{d7} 2 streams",
                        )],
                    ),
                    widget(Widget::SignalWave {
                        active_after_step: 2,
                        caption: Some(
                            "\u{223F}\u{223F}\u{223F} Onde Radio a 5 GHz \u{223F}\u{223F}\u{223F}",
                        ),
                    }),
                ],
            )],
        ])],
        info: vec![info("WiFi 802.11", "wifi"), info("OFDM", "ofdm")],
        ..slide("l2-l1-down", "L2 Data Link + L1 Fisico", Tone::Orange)
    }
}

fn internet_journey() -> Slide {
    let hop = |hop, name, action, ttl| HopCard {
        hop,
        name,
        action,
        ttl,
    };
    let node = |name, icon, x, y| HopNode { name, icon, x, y };
    Slide {
        subtitle: Some("Il pacchetto attraversa multiple reti"),
        icon: Some("\u{1F30D}"),
        bands: vec![
            full(vec![widget(Widget::HopDiagram {
                nodes: vec![
                    node("Telefono", "\u{1F4F1}", 5.0, 50.0),
                    node("Router Casa", "\u{1F3E0}", 20.0, 30.0),
                    node("ISP", "\u{1F3E2}", 35.0, 60.0),
                    node("IXP", "\u{1F310}", 50.0, 40.0),
                    node("Meta Edge", "\u{2601}", 65.0, 55.0),
                    node("WhatsApp", "\u{1F4AC}", 80.0, 35.0),
                    node("PC", "\u{1F4BB}", 95.0, 50.0),
                ],
            })]),
            full(vec![widget(Widget::HopCards {
                hops: vec![
                    hop(1, "Router Casa", "NAT, WiFi\u{2192}Ethernet", "64\u{2192}63"),
                    hop(2, "OLT ISP", "Ottico\u{2192}Elettrico", "63\u{2192}62"),
                    hop(3, "Core Router", "MPLS Switching", "62\u{2192}61"),
                    hop(4, "IXP (MIX)", "Peering", "61\u{2192}60"),
                    hop(5, "Meta Edge", "Load Balancing", "60\u{2192}59"),
                    hop(6, "WhatsApp", "Store & Forward", "59"),
                ],
            })]),
            full(vec![callout(
                Tone::Purple,
                Some("\u{26A0} Sul server WhatsApp:"),
                &[
                    "Il contenuto \"ciao\" rimane criptato E2E. Il server pu\u{f2} solo leggere i metadata e inoltrare il messaggio.",
                ],
            )]),
        ],
        info: vec![info("Routing", "routing"), info("TTL", "ttl")],
        ..slide("internet", "Viaggio attraverso Internet", Tone::Purple)
    }
}

fn physical_link_up() -> Slide {
    Slide {
        subtitle: Some("Gigabit Ethernet (1000BASE-T)"),
        icon: Some("\u{1F4BB}"),
        badge: Some(Direction::Up),
        bands: vec![band(vec![
            vec![card(
                "L1 - SEGNALE ELETTRICO",
                Tone::Cyan,
                vec![
                    styled("Codifica PAM-5 (5 livelli)", Tone::Muted, TextSize::Small),
                    widget(Widget::Pam5Levels {
                        levels: vec!["+1V", "+0.5V", "0V", "-0.5V", "-1V"],
                    }),
                    tiles(Tone::Cyan, &[("Cavo", "Cat5e/Cat6"), ("Velocit\u{e0}", "1 Gbps")]),
                ],
            )],
            vec![card(
                "L2 - FRAME ETHERNET",
                Tone::Orange,
                vec![
                    Block::Fields {
                        rows: vec![
                            Field {
                                tone: Some(Tone::Green),
                                ..field("Dest MAC", "78:45:C4:AB:CD:EF \u{2713}")
                            },
                            field("Src MAC", "00:11:22:33:44:55"),
                            field("EtherType", "0x0800 (IPv4)"),
                        ],
                        tone: Tone::Orange,
                        mono: true,
                    },
                    callout(
                        Tone::Green,
                        Some("\u{2713} FCS Verificato (CRC-32)"),
                        &["Frame integro, passa al L3"],
                    ),
                    styled(
                        "549 byte \u{2192} rimuovi header \u{2192} 489 byte",
                        Tone::Muted,
                        TextSize::Small,
                    ),
                ],
            )],
        ])],
        info: vec![info("Ethernet", "ethernet"), info("CRC-32", "crc")],
        ..slide("l1-l2-up", "L1 + L2 - Ricezione sul PC", Tone::Cyan)
    }
}

fn network_transport_up() -> Slide {
    Slide {
        subtitle: Some("IP Verification + TCP ACK"),
        icon: Some("\u{1F50D}"),
        badge: Some(Direction::Up),
        bands: vec![band(vec![
            vec![card(
                "L3 - VERIFICA IP",
                Tone::Purple,
                vec![
                    Block::Fields {
                        rows: vec![
                            field("Src IP", "157.240.1.52"),
                            Field {
                                tone: Some(Tone::Green),
                                ..field("Dest IP", "192.168.2.50 \u{2713} (questo PC)")
                            },
                            field("TTL", "55"),
                            field("Protocol", "6 \u{2192} TCP"),
                        ],
                        tone: Tone::Purple,
                        mono: true,
                    },
                    checks(
                        Tone::Green,
                        &["Header Checksum OK", "IP \u{e8} per questo host"],
                    ),
                ],
            )],
            vec![card(
                "L4 - TCP PROCESSING",
                Tone::Green,
                vec![
                    Block::Fields {
                        rows: vec![
                            field("Src Port", "443"),
                            Field {
                                tone: Some(Tone::Green),
                                ..field("Dest Port", "58234 \u{2713} (Browser socket)")
                            },
                            field("Seq", "8756432100"),
                        ],
                        tone: Tone::Green,
                        mono: true,
                    },
                    checks(
                        Tone::Green,
                        &[
                            "Checksum TCP valido",
                            "Sequence number corretto",
                            "PSH flag \u{2192} push immediato",
                        ],
                    ),
                    callout(Tone::Blue, Some("\u{1F4E4} Invio ACK"), &["ACK: 8756432537"]),
                ],
            )],
        ])],
        info: vec![info("Checksum", "checksum"), info("ACK", "ack")],
        ..slide("l3-l4-up", "L3 + L4 - Verifica e Consegna", Tone::Purple)
    }
}

fn upper_layers_up() -> Slide {
    Slide {
        subtitle: Some("WebSocket \u{2192} TLS \u{2192} Signal \u{2192} \"ciao\""),
        icon: Some("\u{1F513}"),
        badge: Some(Direction::Up),
        bands: vec![
            band(vec![
                vec![card(
                    "L5 - WEBSOCKET",
                    Tone::Cyan,
                    vec![
                        text("FIN: 1 \u{2713}"),
                        text("Opcode: binary \u{2713}"),
                        text("MASK: 0 (server)"),
                        styled("437 \u{2192} 429 byte", Tone::Cyan, TextSize::Small),
                    ],
                )],
                vec![card(
                    "L6 - TLS DECRYPT",
                    Tone::Yellow,
                    vec![
                        text("Verify Auth Tag \u{2713}"),
                        text("AES-256-GCM"),
                        text("Deserialize Protobuf"),
                        styled("429 \u{2192} 324 byte", Tone::Yellow, TextSize::Small),
                    ],
                )],
                vec![card(
                    "L7 - SIGNAL E2E",
                    Tone::Red,
                    vec![
                        text("ECDH Key Exchange"),
                        text("Double Ratchet"),
                        text("AES-256-GCM"),
                        styled("324 \u{2192} 4 byte", Tone::Red, TextSize::Small),
                    ],
                )],
            ]),
            full(vec![reveal(
                2,
                card(
                    "Messaggio decifrato:",
                    Tone::Green,
                    vec![centered("\"ciao\"", Tone::Green, TextSize::Display)],
                ),
            )]),
            full(vec![centered(
                "Il browser aggiorna il DOM e mostra il messaggio nella chat di WhatsApp Web",
                Tone::Muted,
                TextSize::Small,
            )]),
        ],
        info: vec![info("End-to-end", "e2e")],
        ..slide(
            "l5-l7-up",
            "L5-L6-L7 - Decifratura e Visualizzazione",
            Tone::Yellow,
        )
    }
}

fn decapsulation_walk() -> Slide {
    Slide {
        subtitle: Some("Dal livello 1 al livello 7, ogni header viene rimosso"),
        icon: Some("\u{2B06}"),
        badge: Some(Direction::Up),
        edition: Edition::Extended,
        bands: vec![full(vec![widget(Widget::LayerWalk {
            direction: Direction::Up,
        })])],
        info: vec![info("Deincapsulamento", "decapsulation")],
        ..slide("walk-up", "Risalita nella pila", Tone::Green)
    }
}

fn cipher_bands() -> Vec<CipherBand> {
    vec![
        CipherBand {
            name: "Messaggio",
            content: "\"ciao\"",
            tone: Tone::Plain,
        },
        CipherBand {
            name: "Signal E2E",
            content: "AES-256-GCM",
            tone: Tone::Layer(7),
        },
        CipherBand {
            name: "TLS 1.3",
            content: "AES-256-GCM",
            tone: Tone::Layer(6),
        },
        CipherBand {
            name: "WPA2",
            content: "AES-128-CCM",
            tone: Tone::Layer(2),
        },
    ]
}

fn encryption() -> Slide {
    Slide {
        subtitle: Some("Tre cifrature annidate proteggono lo stesso messaggio"),
        icon: Some("\u{1F510}"),
        edition: Edition::Extended,
        bands: vec![band(vec![
            vec![widget(Widget::EncryptionLayers {
                bands: cipher_bands(),
            })],
            vec![
                card(
                    "CHI PU\u{d2} LEGGERE COSA",
                    Tone::Purple,
                    vec![fields(
                        Tone::Purple,
                        &[
                            ("Vicino di WiFi", "nulla (WPA2)"),
                            ("Provider / ISP", "IP e porte (TLS)"),
                            ("Server WhatsApp", "metadata (Signal)"),
                            ("Destinatario", "\"ciao\""),
                        ],
                    )],
                ),
                reveal(
                    4,
                    callout(
                        Tone::Green,
                        Some("Difesa in profondit\u{e0}"),
                        &[
                            "Ogni livello cifra per un tratto diverso: radio, connessione, conversazione.",
                        ],
                    ),
                ),
            ],
        ])],
        info: vec![info("AES", "aes")],
        ..slide("encryption", "I Tre Livelli di Crittografia", Tone::Purple)
    }
}

fn summary() -> Slide {
    let row = |label, layer, from, to| OverheadRow {
        label,
        layer,
        from,
        to,
    };
    Slide {
        icon: Some("\u{1F4CA}"),
        bands: vec![band(vec![
            vec![card(
                "OVERHEAD DI INCAPSULAMENTO",
                Tone::Cyan,
                vec![
                    widget(Widget::OverheadBars {
                        rows: vec![
                            row("L7 App", 7, 4, 324),
                            row("L6 Pres", 6, 324, 429),
                            row("L5 Sess", 5, 429, 437),
                            row("L4 Trans", 4, 437, 469),
                            row("L3 Net", 3, 469, 489),
                            row("L2 Data", 2, 489, 549),
                        ],
                    }),
                    callout(
                        Tone::Red,
                        Some("137\u{d7} overhead"),
                        &["4 byte \u{2192} 549 byte (13.625%)"],
                    ),
                ],
            )],
            vec![
                card(
                    "TRE LIVELLI DI CRITTOGRAFIA",
                    Tone::Purple,
                    vec![widget(Widget::EncryptionLayers {
                        bands: cipher_bands(),
                    })],
                ),
                card(
                    "TEMPI STIMATI",
                    Tone::Green,
                    vec![
                        fields(
                            Tone::Green,
                            &[
                                ("Elaborazione telefono", "~1-5 ms"),
                                ("Trasmissione WiFi", "~52 \u{3bc}s"),
                                ("Viaggio Internet", "~20-100 ms"),
                                ("Elaborazione PC", "~1-5 ms"),
                            ],
                        ),
                        Block::Fields {
                            rows: vec![Field {
                                tone: Some(Tone::Green),
                                ..field("TOTALE", "~50-200 ms")
                            }],
                            tone: Tone::Green,
                            mono: false,
                        },
                    ],
                ),
            ],
        ])],
        info: vec![info("Overhead", "overhead")],
        ..slide("summary", "Riepilogo del Viaggio", Tone::Cyan)
    }
}

fn review() -> Slide {
    Slide {
        subtitle: Some("Verifica di fine lezione"),
        icon: Some("\u{2753}"),
        edition: Edition::Extended,
        bands: vec![band(vec![
            vec![card(
                "DOMANDE",
                Tone::Cyan,
                vec![Block::Bullets {
                    items: vec![
                        "Quale livello aggiunge gli indirizzi MAC?",
                        "Perch\u{e9} il router di casa cambia l'IP sorgente?",
                        "Che cosa pu\u{f2} leggere il server WhatsApp?",
                        "Perch\u{e9} il TTL diminuisce a ogni hop?",
                        "In quale livello il WiFi diventa Ethernet?",
                        "Quanti byte servono per trasportare 4 byte di testo?",
                    ],
                    tone: Tone::Cyan,
                }],
            )],
            vec![
                reveal(
                    3,
                    card(
                        "RISPOSTE",
                        Tone::Green,
                        vec![Block::Bullets {
                            items: vec![
                                "L2 Data Link",
                                "NAT: da privato 192.168.1.100 a pubblico 82.53.147.201",
                                "Solo i metadata: il contenuto \u{e8} cifrato E2E",
                                "Per eliminare i pacchetti che girano in tondo",
                                "Al router di casa (L2 cambia, L3 resta)",
                                "549 byte",
                            ],
                            tone: Tone::Green,
                        }],
                    ),
                ),
            ],
        ])],
        info: vec![info("OSI vs TCP/IP", "tcpip")],
        ..slide("review", "Domande di Ripasso", Tone::Cyan)
    }
}

fn end() -> Slide {
    Slide {
        layout: Layout::Centered,
        bands: vec![full(vec![
            centered("\u{1F393}", Tone::Plain, TextSize::Display),
            centered("Fine della Simulazione", Tone::Purple, TextSize::Title),
            centered(
                "Abbiamo seguito il messaggio \"ciao\" attraverso tutti i 7 livelli ISO/OSI, dalla digitazione sul telefono alla visualizzazione sul PC.",
                Tone::Muted,
                TextSize::Body,
            ),
            centered(
                "Ogni livello ha aggiunto il proprio contributo: crittografia, affidabilit\u{e0}, routing, e trasmissione fisica.",
                Tone::Muted,
                TextSize::Body,
            ),
            Block::Chips {
                items: vec![
                    "Crittografia E2E",
                    "TCP/IP",
                    "WebSocket",
                    "WiFi/Ethernet",
                    "NAT",
                    "Routing",
                ],
                tone: Tone::Cyan,
            },
            centered("ITTS Belluzzi Da Vinci - Rimini", Tone::Muted, TextSize::Small),
            centered("Corso: Sistemi e Reti", Tone::Muted, TextSize::Small),
        ])],
        ..slide("end", "Fine della Simulazione", Tone::Purple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::info;

    fn walk_blocks<'a>(blocks: &'a [Block], out: &mut Vec<&'a Block>) {
        for block in blocks {
            out.push(block);
            match block {
                Block::Card { blocks, .. } => walk_blocks(blocks, out),
                Block::Reveal { block, .. } => walk_blocks(std::slice::from_ref(block), out),
                _ => {}
            }
        }
    }

    fn all_blocks(slide: &Slide) -> Vec<&Block> {
        let mut out = Vec::new();
        for band in &slide.bands {
            for column in &band.columns {
                walk_blocks(column, &mut out);
            }
        }
        out
    }

    #[test]
    fn test_slide_keys_are_unique() {
        let slides = all();
        let mut keys: Vec<_> = slides.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), slides.len());
    }

    #[test]
    fn test_every_info_link_resolves() {
        for slide in all() {
            for link in &slide.info {
                assert!(
                    info::lookup(link.key).is_some(),
                    "slide {} links to unknown panel {}",
                    slide.key,
                    link.key
                );
            }
        }
    }

    #[test]
    fn test_every_slide_has_content() {
        for slide in all() {
            assert!(!slide.title.is_empty());
            assert!(!slide.bands.is_empty(), "slide {} is empty", slide.key);
            for band in &slide.bands {
                assert!(!band.columns.is_empty());
            }
        }
    }

    #[test]
    fn test_hex_highlights_are_in_range() {
        for slide in all() {
            for block in all_blocks(&slide) {
                if let Block::Hex { bytes, highlight } = block {
                    assert!(highlight.iter().all(|&i| i < bytes.len()));
                }
            }
        }
    }

    #[test]
    fn test_reveal_steps_are_reachable() {
        for slide in all() {
            for block in all_blocks(&slide) {
                if let Block::Reveal { at_step, .. } = block {
                    assert!(*at_step <= crate::controller::ANIMATION_STEP_CAP);
                }
            }
        }
    }

    #[test]
    fn test_overhead_rows_chain() {
        let summary = summary();
        let rows = all_blocks(&summary)
            .into_iter()
            .find_map(|b| match b {
                Block::Widget {
                    widget: Widget::OverheadBars { rows },
                } => Some(rows.clone()),
                _ => None,
            })
            .expect("summary has overhead bars");
        assert_eq!(rows.first().map(|r| r.from), Some(4));
        assert_eq!(rows.last().map(|r| r.to), Some(549));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_hop_diagram_has_seven_nodes() {
        let internet = internet_journey();
        let nodes = all_blocks(&internet)
            .into_iter()
            .find_map(|b| match b {
                Block::Widget {
                    widget: Widget::HopDiagram { nodes },
                } => Some(nodes.len()),
                _ => None,
            });
        assert_eq!(nodes, Some(7));
    }
}
