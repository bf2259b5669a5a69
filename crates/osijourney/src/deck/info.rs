//! Expandable explanation panels, keyed by the links slides carry.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Short `label: value` facts shown under the text.
    pub facts: &'static [(&'static str, &'static str)],
}

pub const PANELS: &[InfoPanel] = &[
    InfoPanel {
        key: "osi",
        title: "Perch\u{e9} un modello a livelli?",
        paragraphs: &[
            "Il modello ISO/OSI divide la comunicazione in sette livelli. Ogni livello offre un servizio a quello superiore e usa quello inferiore, senza conoscerne i dettagli.",
            "Cos\u{ec} il WiFi pu\u{f2} essere sostituito dall'Ethernet senza che WhatsApp se ne accorga.",
        ],
        facts: &[("Standard", "ISO/IEC 7498-1"), ("Anno", "1984"), ("Livelli", "7")],
    },
    InfoPanel {
        key: "encapsulation",
        title: "Incapsulamento",
        paragraphs: &[
            "Scendendo nella pila, ogni livello tratta i dati ricevuti come un carico utile opaco e vi aggiunge il proprio header (e a volte un trailer).",
            "Il destinatario percorre la pila al contrario e rimuove gli header nell'ordine inverso.",
        ],
        facts: &[("Dati utili", "4 byte"), ("Frame finale", "549 byte")],
    },
    InfoPanel {
        key: "pdu",
        title: "Protocol Data Unit",
        paragraphs: &[
            "Ogni livello d\u{e0} un nome diverso alla propria unit\u{e0} di dati: il nome dice a quale livello ci troviamo.",
        ],
        facts: &[
            ("L7-L5", "Dati / Messaggio"),
            ("L4", "Segmento"),
            ("L3", "Pacchetto"),
            ("L2", "Frame"),
            ("L1", "Bit"),
        ],
    },
    InfoPanel {
        key: "signal",
        title: "Signal Protocol",
        paragraphs: &[
            "WhatsApp usa il Signal Protocol: le chiavi vengono concordate con Curve25519 e ogni messaggio usa una chiave nuova grazie al Double Ratchet.",
            "Anche se una chiave venisse rubata, i messaggi passati restano protetti (forward secrecy).",
        ],
        facts: &[
            ("Scambio chiavi", "X3DH + Curve25519"),
            ("Cifratura", "AES-256"),
            ("Integrit\u{e0}", "HMAC-SHA256"),
        ],
    },
    InfoPanel {
        key: "tls",
        title: "TLS 1.3",
        paragraphs: &[
            "TLS protegge la connessione tra il telefono e il server WhatsApp. In TLS 1.3 l'handshake richiede un solo round trip.",
            "Ogni record porta un tag di autenticazione di 16 byte che rivela qualsiasi modifica lungo il percorso.",
        ],
        facts: &[
            ("Content type", "0x17 Application Data"),
            ("Cipher suite", "TLS_AES_256_GCM_SHA384"),
        ],
    },
    InfoPanel {
        key: "websocket",
        title: "WebSocket",
        paragraphs: &[
            "WebSocket mantiene aperto un canale bidirezionale sopra TCP: il server pu\u{f2} spingere i messaggi senza che il client li richieda.",
            "I frame inviati dal client sono mascherati con una chiave XOR di 4 byte.",
        ],
        facts: &[("Header", "2-14 byte"), ("Porta", "443 (wss://)")],
    },
    InfoPanel {
        key: "tcp",
        title: "TCP",
        paragraphs: &[
            "TCP numera ogni byte inviato. Il destinatario conferma con un ACK i byte ricevuti e il mittente ritrasmette quelli persi.",
            "La porta sorgente \u{e8} effimera, scelta dal sistema operativo; la porta 443 identifica il servizio HTTPS.",
        ],
        facts: &[("Header", "20-60 byte"), ("Flag usati", "ACK, PSH")],
    },
    InfoPanel {
        key: "nat",
        title: "NAT",
        paragraphs: &[
            "Gli indirizzi 192.168.x.x sono privati e non esistono su Internet. Il router di casa li sostituisce con il proprio IP pubblico e annota la traduzione in una tabella.",
            "Quando arriva la risposta, la tabella indica a quale dispositivo interno consegnarla.",
        ],
        facts: &[
            ("Privato", "192.168.1.100:52431"),
            ("Pubblico", "82.53.147.201:34567"),
        ],
    },
    InfoPanel {
        key: "wifi",
        title: "WiFi 802.11",
        paragraphs: &[
            "Il frame WiFi ha fino a quattro indirizzi MAC perch\u{e9} distingue chi trasmette via radio da chi ha originato il frame.",
            "WPA2 cifra il carico utile con AES-CCMP: chi \u{e8} vicino pu\u{f2} ricevere il segnale ma non leggerlo.",
        ],
        facts: &[("Standard", "802.11ac"), ("Sicurezza", "WPA2-CCMP")],
    },
    InfoPanel {
        key: "ofdm",
        title: "OFDM e 256-QAM",
        paragraphs: &[
            "OFDM divide il canale in centinaia di sottoportanti strette, trasmesse in parallelo.",
            "Con 256-QAM ogni simbolo su una sottoportante trasporta 8 bit, combinando ampiezza e fase.",
        ],
        facts: &[("Canale", "36 (5180 MHz)"), ("Larghezza", "80 MHz")],
    },
    InfoPanel {
        key: "routing",
        title: "Routing",
        paragraphs: &[
            "Ogni router guarda solo l'IP di destinazione e sceglie il prossimo salto consultando la propria tabella di instradamento.",
            "Nessun router conosce il percorso completo: il pacchetto procede un salto alla volta.",
        ],
        facts: &[("Protocollo tra reti", "BGP"), ("Punto di scambio", "MIX Milano")],
    },
    InfoPanel {
        key: "ttl",
        title: "Time To Live",
        paragraphs: &[
            "Ogni router decrementa il TTL di uno. Se arriva a zero il pacchetto viene scartato e il mittente riceve un messaggio ICMP.",
            "Cos\u{ec} un errore di routing non fa girare un pacchetto in tondo per sempre.",
        ],
        facts: &[("Valore iniziale", "64"), ("All'arrivo", "55")],
    },
    InfoPanel {
        key: "ethernet",
        title: "Ethernet",
        paragraphs: &[
            "Nella rete del PC il frame viaggia su cavo. Il router ha sostituito l'header WiFi con un header Ethernet: il livello 2 cambia a ogni tratta, il livello 3 resta.",
        ],
        facts: &[("Standard", "IEEE 802.3"), ("EtherType IPv4", "0x0800")],
    },
    InfoPanel {
        key: "crc",
        title: "CRC-32",
        paragraphs: &[
            "Il Frame Check Sequence \u{e8} un CRC di 32 bit calcolato su tutto il frame. Il ricevente lo ricalcola: se non coincide il frame viene scartato.",
        ],
        facts: &[("Lunghezza", "4 byte"), ("Posizione", "in coda al frame")],
    },
    InfoPanel {
        key: "checksum",
        title: "Checksum",
        paragraphs: &[
            "L'header IP ha un proprio checksum, ricalcolato da ogni router perch\u{e9} il TTL cambia a ogni salto.",
            "TCP ha un checksum separato che copre header e dati.",
        ],
        facts: &[("Dimensione", "16 bit"), ("Algoritmo", "complemento a uno")],
    },
    InfoPanel {
        key: "ack",
        title: "Acknowledgment",
        paragraphs: &[
            "Il numero di ACK \u{e8} il prossimo byte atteso: numero di sequenza ricevuto pi\u{f9} la lunghezza dei dati.",
        ],
        facts: &[("Seq ricevuto", "8756432100"), ("ACK inviato", "8756432537")],
    },
    InfoPanel {
        key: "e2e",
        title: "Crittografia end-to-end",
        paragraphs: &[
            "Solo i due dispositivi possiedono le chiavi per leggere il messaggio. Il server WhatsApp inoltra un blocco cifrato e vede soltanto i metadata.",
        ],
        facts: &[("Visibile al server", "mittente, destinatario, orario"), ("Nascosto", "\"ciao\"")],
    },
    InfoPanel {
        key: "decapsulation",
        title: "Deincapsulamento",
        paragraphs: &[
            "Ogni livello del ricevente legge l'header del livello corrispondente del mittente, lo verifica e lo rimuove prima di passare il resto al livello superiore.",
        ],
        facts: &[("Ingresso", "549 byte"), ("Uscita", "4 byte")],
    },
    InfoPanel {
        key: "aes",
        title: "AES",
        paragraphs: &[
            "AES \u{e8} un cifrario a blocchi di 128 bit. Le modalit\u{e0} GCM e CCM aggiungono un controllo di integrit\u{e0} alla cifratura.",
            "Il messaggio \u{e8} cifrato tre volte, con chiavi diverse e per tratti diversi.",
        ],
        facts: &[("Blocco", "128 bit"), ("Chiavi", "128 o 256 bit")],
    },
    InfoPanel {
        key: "overhead",
        title: "Overhead",
        paragraphs: &[
            "Per trasportare 4 byte di testo servono 549 byte sul mezzo fisico. Con messaggi lunghi la percentuale di header diminuisce molto.",
        ],
        facts: &[("Rapporto", "137\u{d7}"), ("Efficienza", "0.73%")],
    },
    InfoPanel {
        key: "tcpip",
        title: "OSI e TCP/IP",
        paragraphs: &[
            "Internet usa il modello TCP/IP a quattro livelli. I livelli 5-7 di OSI confluiscono nel livello applicazione, i livelli 1-2 nel livello di accesso alla rete.",
        ],
        facts: &[
            ("Applicazione", "L7 + L6 + L5"),
            ("Trasporto", "L4"),
            ("Internet", "L3"),
            ("Accesso alla rete", "L2 + L1"),
        ],
    },
];

pub fn lookup(key: &str) -> Option<&'static InfoPanel> {
    PANELS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_keys_are_unique() {
        let mut keys: Vec<_> = PANELS.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PANELS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("nat").map(|p| p.title), Some("NAT"));
        assert!(lookup("bluetooth").is_none());
    }

    #[test]
    fn test_every_panel_has_text() {
        for panel in PANELS {
            assert!(!panel.paragraphs.is_empty(), "{} has no text", panel.key);
        }
    }
}
